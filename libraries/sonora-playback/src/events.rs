//! Playback Events
//!
//! Queue-based alternative to implementing [`PlaybackObserver`] directly:
//! register an [`EventCollector`] and drain its events from the UI loop.

use crate::mode::PlaybackMode;
use crate::observer::PlaybackObserver;
use serde::{Deserialize, Serialize};
use sonora_core::Track;
use std::sync::{Mutex, PoisonError};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Current track changed (`None` when the catalog is empty)
    TrackChanged { track: Option<Track> },

    /// Playback started or paused
    PlayStateChanged { is_playing: bool },

    /// Repeat/shuffle mode changed
    ModeChanged { mode: PlaybackMode },
}

/// Observer that queues events until drained
#[derive(Debug, Default)]
pub struct EventCollector {
    pending_events: Mutex<Vec<PlaybackEvent>>,
}

impl EventCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all pending events
    pub fn drain(&self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.lock().is_empty()
    }

    fn push(&self, event: PlaybackEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PlaybackEvent>> {
        // A panicking observer elsewhere must not lose the queue
        self.pending_events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlaybackObserver for EventCollector {
    fn on_track_changed(&self, track: Option<&Track>) {
        self.push(PlaybackEvent::TrackChanged {
            track: track.cloned(),
        });
    }

    fn on_play_state_changed(&self, is_playing: bool) {
        self.push(PlaybackEvent::PlayStateChanged { is_playing });
    }

    fn on_mode_changed(&self, mode: PlaybackMode) {
        self.push(PlaybackEvent::ModeChanged { mode });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_order_and_empties_queue() {
        let collector = EventCollector::new();
        collector.on_play_state_changed(true);
        collector.on_mode_changed(PlaybackMode::RepeatOne);
        assert!(collector.has_pending_events());

        let events = collector.drain();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::PlayStateChanged { is_playing: true },
                PlaybackEvent::ModeChanged {
                    mode: PlaybackMode::RepeatOne
                },
            ]
        );
        assert!(!collector.has_pending_events());
        assert!(collector.drain().is_empty());
    }
}
