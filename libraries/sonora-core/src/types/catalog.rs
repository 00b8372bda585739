/// Catalog domain type
use crate::traits::TrackCatalog;
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Ordered sequence of playable tracks
///
/// Built once per session load. The order is stable until the catalog is
/// explicitly reloaded. An empty catalog is a valid state meaning "nothing
/// to play".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Create a catalog from tracks, keeping their order
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// True if there is nothing to play
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Iterate tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl From<Vec<Track>> for Catalog {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}

impl FromIterator<Track> for Catalog {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

/// An in-memory catalog serves itself
impl TrackCatalog for Catalog {
    fn load(&self) -> Catalog {
        self.clone()
    }
}
