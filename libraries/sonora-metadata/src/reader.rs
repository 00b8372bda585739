/// Metadata reader implementation using lofty
use crate::error::MetadataError;
use lofty::{PictureType, TaggedFileExt};
use sonora_core::{Artwork, MetadataReader, TrackMetadata};
use std::fs::File;
use std::path::Path;

/// Default maximum artwork size (5MB)
pub const DEFAULT_MAX_ARTWORK_SIZE: usize = 5 * 1024 * 1024;

/// Metadata reader using the lofty library
///
/// Reads title, artist and the embedded cover picture. Files whose tags
/// can't be parsed still produce (empty) metadata; only files that can't
/// be opened at all are reported as errors.
pub struct LoftyMetadataReader {
    max_artwork_size: usize,
}

impl LoftyMetadataReader {
    /// Create a new metadata reader
    pub fn new() -> Self {
        Self {
            max_artwork_size: DEFAULT_MAX_ARTWORK_SIZE,
        }
    }

    /// Create a reader with a custom artwork size limit (in bytes)
    pub fn with_max_artwork_size(max_artwork_size: usize) -> Self {
        Self { max_artwork_size }
    }

    /// Current artwork size limit
    pub fn max_artwork_size(&self) -> usize {
        self.max_artwork_size
    }

    /// Extract metadata from lofty tag
    fn extract_from_tag(&self, tag: &lofty::Tag, path: &Path) -> TrackMetadata {
        let mut metadata = TrackMetadata::new();

        // lofty 0.18 API - iterate through items
        for item in tag.items() {
            match item.key() {
                lofty::ItemKey::TrackTitle => {
                    metadata.title = item.value().text().map(|s| s.to_string());
                }
                lofty::ItemKey::TrackArtist => {
                    metadata.artist = item.value().text().map(|s| s.to_string());
                }
                _ => {}
            }
        }

        match self.extract_artwork(tag) {
            Ok(artwork) => metadata.artwork = artwork,
            Err(e) => {
                tracing::warn!("Skipping artwork in {}: {}", path.display(), e);
            }
        }

        metadata
    }

    /// Pick the cover picture: front cover first, otherwise the first picture
    fn extract_artwork(&self, tag: &lofty::Tag) -> Result<Option<Artwork>, MetadataError> {
        let pictures = tag.pictures();

        let picture = pictures
            .iter()
            .find(|p| matches!(p.pic_type(), PictureType::CoverFront))
            .or_else(|| pictures.first());

        let Some(picture) = picture else {
            return Ok(None);
        };

        let data = picture.data();
        if data.is_empty() {
            return Ok(None);
        }
        if data.len() > self.max_artwork_size {
            return Err(MetadataError::ArtworkTooLarge(
                data.len(),
                self.max_artwork_size,
            ));
        }

        let mime_type = picture
            .mime_type()
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        Ok(Some(Artwork::new(data.to_vec(), mime_type)))
    }
}

impl Default for LoftyMetadataReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataReader for LoftyMetadataReader {
    fn read(&self, path: &Path) -> sonora_core::Result<TrackMetadata> {
        if !path.is_file() {
            return Err(MetadataError::FileNotFound(path.to_path_buf()).into());
        }

        // Surface permission problems as read failures, not as "untagged"
        File::open(path).map_err(MetadataError::from)?;

        let tagged_file = match lofty::read_from_path(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    "Could not parse tags in {}, using fallbacks: {}",
                    path.display(),
                    e
                );
                return Ok(TrackMetadata::new());
            }
        };

        // Get primary tag or first available tag
        let metadata = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .map(|tag| self.extract_from_tag(tag, path))
            .unwrap_or_default();

        Ok(metadata)
    }
}
