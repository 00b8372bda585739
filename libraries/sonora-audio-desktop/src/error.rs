//! Desktop audio errors

use thiserror::Error;

/// Result type alias using `DesktopAudioError`
pub type Result<T> = std::result::Result<T, DesktopAudioError>;

/// Errors from the desktop audio backend
#[derive(Error, Debug)]
pub enum DesktopAudioError {
    /// No usable output device
    #[error("Audio output unavailable: {0}")]
    OutputUnavailable(String),

    /// File could not be decoded
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Container could not be probed
    #[error("Probe failed: {0}")]
    Probe(#[from] symphonia::core::errors::Error),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DesktopAudioError> for sonora_core::SonoraError {
    fn from(err: DesktopAudioError) -> Self {
        match err {
            DesktopAudioError::Io(io) => sonora_core::SonoraError::Io(io),
            other => sonora_core::SonoraError::audio(other.to_string()),
        }
    }
}
