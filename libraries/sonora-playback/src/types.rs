//! Core types for playback

use crate::mode::PlaybackMode;
use crate::ticker::DEFAULT_PROGRESS_INTERVAL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Externally visible session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Catalog has no playable tracks
    Empty,

    /// A track is current but not playing
    Paused,

    /// A track is current and playing
    Playing,
}

/// Configuration for the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0.0 - 1.0, default: 1.0)
    pub volume: f32,

    /// Initial playback mode (default: sequential)
    pub mode: PlaybackMode,

    /// Progress refresh period in milliseconds (default: 500)
    pub progress_interval_ms: u64,
}

impl PlaybackConfig {
    /// Progress refresh period (never zero)
    pub fn progress_interval(&self) -> Duration {
        if self.progress_interval_ms == 0 {
            DEFAULT_PROGRESS_INTERVAL
        } else {
            Duration::from_millis(self.progress_interval_ms)
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            mode: PlaybackMode::Sequential,
            progress_interval_ms: 500,
        }
    }
}
