mod catalog;
mod track;

pub use catalog::Catalog;
pub use track::{Artwork, Track, TrackMetadata, UNKNOWN_ARTIST};
