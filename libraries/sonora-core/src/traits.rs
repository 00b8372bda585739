/// Core traits for Sonora Play
use crate::error::Result;
use crate::types::{Catalog, TrackMetadata};
use std::path::Path;

/// Metadata reader trait
///
/// Implementers extract display metadata (title, artist, artwork) from an
/// audio file. Reading is best-effort: a file whose tags cannot be parsed
/// yields `Ok` with empty fields so the caller can apply fallbacks.
///
/// # Errors
/// Only returns an error when the file itself cannot be read (missing,
/// not a regular file, permission denied). Callers skip such files.
pub trait MetadataReader: Send + Sync {
    /// Read metadata from the audio file at `path`
    fn read(&self, path: &Path) -> Result<TrackMetadata>;
}

/// Track catalog trait
///
/// Produces the ordered sequence of playable tracks for a session.
/// Loading never fails: an empty `Catalog` is the "nothing to play"
/// condition, not an error.
pub trait TrackCatalog {
    /// Build the catalog
    fn load(&self) -> Catalog;
}

impl<T: TrackCatalog + ?Sized> TrackCatalog for Box<T> {
    fn load(&self) -> Catalog {
        (**self).load()
    }
}
