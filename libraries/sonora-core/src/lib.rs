//! Sonora Play Core
//!
//! Platform-agnostic core types, traits, and error handling for Sonora Play.
//!
//! This crate provides the building blocks shared by the catalog, the
//! metadata reader and the playback session.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Artwork`, `TrackMetadata`, `Catalog`
//! - **Core Traits**: `MetadataReader`, `TrackCatalog`
//! - **Error Handling**: Unified `SonoraError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use sonora_core::{Catalog, Track, TrackCatalog, TrackMetadata};
//! use std::path::PathBuf;
//!
//! // Untagged file: title falls back to the file name, artist to a placeholder
//! let track = Track::from_metadata(PathBuf::from("/music/intro.mp3"), TrackMetadata::default());
//! assert_eq!(track.title, "intro");
//! assert_eq!(track.artist, "Unknown Artist");
//!
//! // An in-memory catalog is itself a `TrackCatalog`
//! let catalog = Catalog::new(vec![track]);
//! assert_eq!(catalog.load().len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SonoraError};
pub use traits::{MetadataReader, TrackCatalog};
pub use types::{Artwork, Catalog, Track, TrackMetadata, UNKNOWN_ARTIST};
