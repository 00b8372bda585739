//! Sonora Play Library
//!
//! Turns a flat storage directory into the ordered track catalog:
//!
//! - [`discover_audio_files`]: extension-filtered, name-sorted listing
//! - [`bootstrap_storage`]: copy bundled starter tracks on first run
//! - [`LibraryCatalog`]: the [`TrackCatalog`](sonora_core::TrackCatalog)
//!   that reads metadata for every file and applies display fallbacks
//!
//! # Example
//!
//! ```rust,no_run
//! use sonora_core::{MetadataReader, TrackCatalog, TrackMetadata};
//! use sonora_library::{LibraryCatalog, LibraryConfig};
//! use std::path::Path;
//!
//! struct NoTags;
//!
//! impl MetadataReader for NoTags {
//!     fn read(&self, _path: &Path) -> sonora_core::Result<TrackMetadata> {
//!         Ok(TrackMetadata::default())
//!     }
//! }
//!
//! let config = LibraryConfig::with_storage_dir("/home/me/Music");
//! let catalog = LibraryCatalog::new(NoTags, &config).load();
//! for track in &catalog {
//!     println!("{} - {}", track.title, track.artist);
//! }
//! ```

mod bootstrap;
mod catalog;
mod config;
mod error;
mod scanner;

pub use bootstrap::{bootstrap_storage, BootstrapReport};
pub use catalog::{LibraryCatalog, LoadReport};
pub use config::{default_extensions, LibraryConfig, DEFAULT_MAX_ARTWORK_BYTES};
pub use error::{LibraryError, Result};
pub use scanner::{discover_audio_files, has_audio_files, is_audio_file};
