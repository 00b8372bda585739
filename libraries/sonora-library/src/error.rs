//! Library error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `LibraryError`
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Errors raised while preparing or scanning the storage directory
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Storage directory could not be created: {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<LibraryError> for sonora_core::SonoraError {
    fn from(err: LibraryError) -> Self {
        sonora_core::SonoraError::library(err.to_string())
    }
}
