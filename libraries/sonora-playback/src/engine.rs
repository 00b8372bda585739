//! Platform-agnostic audio engine traits
//!
//! Abstracts decoding and output so the session works with any backend
//! (rodio on desktop, a fake in tests).

use crate::error::Result;
use std::path::Path;
use std::time::Duration;

/// Audio output capability
///
/// Opens tracks and hands back a decoder handle. The session owns at most
/// one handle at a time and drops the old one before preparing the next.
pub trait AudioEngine {
    /// Open `path` for playback
    ///
    /// The returned handle is paused at the start of the track.
    ///
    /// # Errors
    /// Returns an error if the file can't be opened or decoded.
    fn prepare(&mut self, path: &Path) -> Result<Box<dyn DecoderHandle>>;
}

/// A live, prepared track
///
/// Dropping the handle must stop its output.
pub trait DecoderHandle {
    /// Start or resume output
    fn play(&mut self);

    /// Pause output, keeping the position
    fn pause(&mut self);

    /// Seek to position in track
    ///
    /// # Errors
    /// Returns an error if the format doesn't support seeking.
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Current playback position
    fn current_time(&self) -> Duration;

    /// Total track duration, if known
    fn duration(&self) -> Option<Duration>;

    /// Set output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Check if the track has played to the end
    fn is_finished(&self) -> bool;
}
