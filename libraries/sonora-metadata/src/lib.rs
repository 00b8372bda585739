//! Sonora Play Metadata
//!
//! Display metadata extraction for Sonora Play.
//!
//! This crate provides:
//! - Title and artist reading from audio file tags (MP3, FLAC, OGG, WAV, AAC, OPUS)
//! - Embedded artwork extraction (front cover preferred, size-limited)
//!
//! # Example
//!
//! ```rust,no_run
//! use sonora_core::MetadataReader;
//! use sonora_metadata::LoftyMetadataReader;
//! use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = LoftyMetadataReader::new();
//! let metadata = reader.read(Path::new("/music/song.mp3"))?;
//! println!("{:?} by {:?}", metadata.title, metadata.artist);
//! # Ok(())
//! # }
//! ```

mod error;
mod reader;

pub use error::{MetadataError, Result};
pub use reader::{LoftyMetadataReader, DEFAULT_MAX_ARTWORK_SIZE};
