//! Error types for playback

use std::path::PathBuf;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No decoder is prepared for the current track
    #[error("No track loaded")]
    NoTrackLoaded,

    /// The engine could not open or decode a track
    #[error("Failed to prepare {}: {reason}", path.display())]
    PrepareFailed { path: PathBuf, reason: String },

    /// Seek rejected by the decoder
    #[error("Seek failed: {0}")]
    SeekFailed(String),

    /// Session builder is missing a collaborator
    #[error("Playback session is missing its {0}")]
    MissingCollaborator(&'static str),

    /// Progress ticker thread could not be started
    #[error("Failed to start progress ticker: {0}")]
    Ticker(#[source] std::io::Error),
}

impl PlaybackError {
    /// Prepare failure for `path`
    pub fn prepare_failed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::PrepareFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<PlaybackError> for sonora_core::SonoraError {
    fn from(err: PlaybackError) -> Self {
        sonora_core::SonoraError::audio(err.to_string())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
