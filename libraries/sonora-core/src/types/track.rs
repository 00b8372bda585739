/// Track domain type
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Artist shown for files without an artist tag
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Fallback MIME type for pictures that don't declare one
const DEFAULT_ARTWORK_MIME: &str = "image/jpeg";

/// Embedded cover image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// Raw image bytes
    pub data: Vec<u8>,

    /// MIME type (e.g., "image/jpeg", "image/png")
    pub mime_type: String,
}

impl Artwork {
    /// Create new artwork; an empty MIME type is replaced by `image/jpeg`
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        let mime_type = if mime_type.trim().is_empty() {
            DEFAULT_ARTWORK_MIME.to_string()
        } else {
            mime_type
        };

        Self { data, mime_type }
    }

    /// Size of the image in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the image has no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Raw metadata as read from a file's tags
///
/// Every field is optional: files may be untagged or partially tagged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub artwork: Option<Artwork>,
}

impl TrackMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }
}

/// Playable track
///
/// Immutable value. Identity is positional (index in the catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title (file name when untagged)
    pub title: String,

    /// Artist name (`Unknown Artist` when untagged)
    pub artist: String,

    /// File path for audio decoding
    pub path: PathBuf,

    /// Embedded cover image, if any
    pub artwork: Option<Artwork>,
}

impl Track {
    /// Create a track with all display fields known
    pub fn new(title: impl Into<String>, artist: impl Into<String>, path: PathBuf) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            path,
            artwork: None,
        }
    }

    /// Attach artwork
    #[must_use]
    pub fn with_artwork(mut self, artwork: Artwork) -> Self {
        self.artwork = Some(artwork);
        self
    }

    /// Build a track from tag metadata, applying display fallbacks
    ///
    /// - Missing or blank title: the file's base name
    /// - Missing or blank artist: [`UNKNOWN_ARTIST`]
    /// - Missing artwork: left absent (the view draws a default cover)
    pub fn from_metadata(path: PathBuf, metadata: TrackMetadata) -> Self {
        let title = non_blank(metadata.title).unwrap_or_else(|| base_name(&path));
        let artist = non_blank(metadata.artist).unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        Self {
            title,
            artist,
            path,
            artwork: metadata.artwork.filter(|a| !a.is_empty()),
        }
    }

    /// True if the track carries a cover image
    pub fn has_artwork(&self) -> bool {
        self.artwork.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn base_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
