//! Track catalog built from the storage directory

use crate::config::LibraryConfig;
use crate::scanner::discover_audio_files;
use sonora_core::{Catalog, MetadataReader, Track, TrackCatalog};
use std::path::{Path, PathBuf};

/// Statistics from a catalog load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Audio files found in storage
    pub files_discovered: usize,

    /// Tracks that made it into the catalog
    pub tracks_loaded: usize,

    /// Files skipped because they could not be read
    pub skipped: Vec<(PathBuf, String)>,
}

impl LoadReport {
    /// True when nothing is playable
    pub fn is_empty(&self) -> bool {
        self.tracks_loaded == 0
    }
}

/// `TrackCatalog` over a flat directory of audio files
pub struct LibraryCatalog<R: MetadataReader> {
    reader: R,
    storage_dir: PathBuf,
    extensions: Vec<String>,
}

impl<R: MetadataReader> LibraryCatalog<R> {
    /// Create a catalog reading `config.storage_dir` with `reader`
    pub fn new(reader: R, config: &LibraryConfig) -> Self {
        Self {
            reader,
            storage_dir: config.storage_dir.clone(),
            extensions: config.extensions.clone(),
        }
    }

    /// Directory the catalog is built from
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Load the catalog, also returning what happened along the way
    ///
    /// Never fails: a file whose metadata can't be read is skipped, and
    /// an empty directory produces an empty catalog.
    pub fn load_with_report(&self) -> (Catalog, LoadReport) {
        let files = discover_audio_files(&self.storage_dir, &self.extensions);
        let mut report = LoadReport {
            files_discovered: files.len(),
            ..LoadReport::default()
        };

        let mut tracks = Vec::with_capacity(files.len());
        for path in files {
            match self.reader.read(&path) {
                Ok(metadata) => tracks.push(Track::from_metadata(path, metadata)),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    report.skipped.push((path, e.to_string()));
                }
            }
        }
        report.tracks_loaded = tracks.len();

        if tracks.is_empty() {
            tracing::info!(
                "Catalog is empty: no playable files in {}",
                self.storage_dir.display()
            );
        } else {
            tracing::info!(
                "Loaded {} tracks from {} ({} skipped)",
                report.tracks_loaded,
                self.storage_dir.display(),
                report.skipped.len()
            );
        }

        (Catalog::new(tracks), report)
    }
}

impl<R: MetadataReader> TrackCatalog for LibraryCatalog<R> {
    fn load(&self) -> Catalog {
        self.load_with_report().0
    }
}
