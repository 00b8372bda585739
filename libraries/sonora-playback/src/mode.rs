//! Repeat / shuffle mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playback mode
///
/// Exactly one mode is active. Cycling always follows
/// sequential → repeat-one → repeat-all → shuffle → sequential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackMode {
    /// Play through the catalog in order
    #[default]
    Sequential,

    /// Loop the current track
    RepeatOne,

    /// Loop the whole catalog
    RepeatAll,

    /// Random order
    Shuffle,
}

impl PlaybackMode {
    /// All modes in cycle order
    pub const ALL: [PlaybackMode; 4] = [
        PlaybackMode::Sequential,
        PlaybackMode::RepeatOne,
        PlaybackMode::RepeatAll,
        PlaybackMode::Shuffle,
    ];

    /// The mode that follows this one in the cycle
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PlaybackMode::Sequential => PlaybackMode::RepeatOne,
            PlaybackMode::RepeatOne => PlaybackMode::RepeatAll,
            PlaybackMode::RepeatAll => PlaybackMode::Shuffle,
            PlaybackMode::Shuffle => PlaybackMode::Sequential,
        }
    }

    /// Stable kebab-case name, as used in config files
    pub fn as_str(self) -> &'static str {
        match self {
            PlaybackMode::Sequential => "sequential",
            PlaybackMode::RepeatOne => "repeat-one",
            PlaybackMode::RepeatAll => "repeat-all",
            PlaybackMode::Shuffle => "shuffle",
        }
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaybackMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlaybackMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown playback mode: {s}"))
    }
}
