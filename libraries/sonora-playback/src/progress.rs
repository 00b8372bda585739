//! Progress snapshot for the position display

use std::fmt;
use std::time::Duration;

/// Duration reported when nothing is prepared or the length is unknown
///
/// Strictly positive so `current / duration` is always defined.
pub const UNKNOWN_DURATION: Duration = Duration::from_secs(1);

/// Position within the current track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackProgress {
    /// Elapsed time
    pub current: Duration,
    /// Track length (never zero)
    pub duration: Duration,
}

impl PlaybackProgress {
    /// Build a snapshot, substituting [`UNKNOWN_DURATION`] for a zero length
    pub fn new(current: Duration, duration: Duration) -> Self {
        let duration = if duration.is_zero() {
            UNKNOWN_DURATION
        } else {
            duration
        };
        Self { current, duration }
    }

    /// Fraction played, clamped to `[0, 1]`
    pub fn ratio(&self) -> f32 {
        (self.current.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Time left in the track
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.current)
    }
}

impl Default for PlaybackProgress {
    fn default() -> Self {
        Self::new(Duration::ZERO, UNKNOWN_DURATION)
    }
}

impl fmt::Display for PlaybackProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}",
            format_time(self.current),
            format_time(self.duration)
        )
    }
}

/// Format as `mm:ss` (minutes keep growing past 59)
pub fn format_time(time: Duration) -> String {
    let total = time.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
