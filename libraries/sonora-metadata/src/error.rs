/// Metadata-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File not found (or not a regular file)
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Artwork exceeds the configured size limit
    #[error("Artwork too large: {0} bytes (max {1} bytes)")]
    ArtworkTooLarge(usize, usize),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<MetadataError> for sonora_core::SonoraError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::FileNotFound(path) => sonora_core::SonoraError::FileNotFound(path),
            MetadataError::Io(io) => sonora_core::SonoraError::Io(io),
            other => sonora_core::SonoraError::metadata(other.to_string()),
        }
    }
}
