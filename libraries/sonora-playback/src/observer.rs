//! Playback observers
//!
//! The session does not own its observers. Each one is held as a `Weak`
//! reference in an [`ObserverRegistry`] and addressed by an
//! [`ObserverId`]; observers dropped by the UI are pruned on the next
//! notification.

use crate::mode::PlaybackMode;
use sonora_core::Track;
use std::sync::{Arc, Weak};

/// Receives the session's three externally visible transitions
pub trait PlaybackObserver {
    /// Current track changed; `None` means there is nothing to play
    fn on_track_changed(&self, track: Option<&Track>);

    /// Playing/paused changed
    fn on_play_state_changed(&self, is_playing: bool);

    /// Repeat/shuffle mode changed
    fn on_mode_changed(&self, mode: PlaybackMode);
}

/// Handle to a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Non-owning list of observers
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(ObserverId, Weak<dyn PlaybackObserver>)>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer without taking ownership of it
    pub fn register<O: PlaybackObserver + 'static>(&mut self, observer: &Arc<O>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;

        let weak: Weak<O> = Arc::downgrade(observer);
        let weak: Weak<dyn PlaybackObserver> = weak;
        self.entries.push((id, weak));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of observers still alive
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    /// True if no live observers are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `f` on every live observer, in registration order
    pub fn notify(&mut self, mut f: impl FnMut(&dyn PlaybackObserver)) {
        self.entries.retain(|(id, weak)| match weak.upgrade() {
            Some(observer) => {
                f(observer.as_ref());
                true
            }
            None => {
                tracing::debug!("Pruning dropped observer {:?}", id);
                false
            }
        });
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.entries.len())
            .finish()
    }
}
