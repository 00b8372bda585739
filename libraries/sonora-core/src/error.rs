/// Core error types for Sonora Play
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `SonoraError`
pub type Result<T> = std::result::Result<T, SonoraError>;

/// Core error type for Sonora Play
#[derive(Error, Debug)]
pub enum SonoraError {
    /// Audio decoding/playback errors
    #[error("Audio error: {0}")]
    Audio(String),

    /// Metadata parsing errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Library (catalog, bootstrap) errors
    #[error("Library error: {0}")]
    Library(String),

    /// File does not exist or is not a regular file
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SonoraError {
    /// Create an audio error
    pub fn audio(msg: impl Into<String>) -> Self {
        Self::Audio(msg.into())
    }

    /// Create a metadata error
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Create a library error
    pub fn library(msg: impl Into<String>) -> Self {
        Self::Library(msg.into())
    }
}
