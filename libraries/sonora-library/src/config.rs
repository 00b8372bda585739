//! Library configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default maximum embedded artwork size (5MB)
pub const DEFAULT_MAX_ARTWORK_BYTES: usize = 5 * 1024 * 1024;

/// Where tracks live and which files count as audio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// User-writable directory the catalog is built from
    pub storage_dir: PathBuf,

    /// Starter tracks copied into `storage_dir` on first run
    pub bundled_dir: Option<PathBuf>,

    /// Accepted audio file extensions (lowercase, without the dot)
    pub extensions: Vec<String>,

    /// Embedded pictures larger than this are ignored
    pub max_artwork_bytes: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./music"),
            bundled_dir: None,
            extensions: default_extensions(),
            max_artwork_bytes: DEFAULT_MAX_ARTWORK_BYTES,
        }
    }
}

impl LibraryConfig {
    /// Config for a given storage directory with default everything else
    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            ..Self::default()
        }
    }
}

/// Audio formats the desktop decoder understands
pub fn default_extensions() -> Vec<String> {
    ["mp3", "flac", "ogg", "opus", "wav", "m4a", "aac"]
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_accepts_common_formats() {
        let config = LibraryConfig::default();
        assert!(config.extensions.contains(&"mp3".to_string()));
        assert!(config.extensions.contains(&"flac".to_string()));
        assert_eq!(config.extensions.len(), 7);
        assert_eq!(config.max_artwork_bytes, 5 * 1024 * 1024);
        assert!(config.bundled_dir.is_none());
    }

    #[test]
    fn with_storage_dir_keeps_defaults() {
        let config = LibraryConfig::with_storage_dir("/tmp/tracks");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/tracks"));
        assert_eq!(config.extensions, default_extensions());
    }
}
