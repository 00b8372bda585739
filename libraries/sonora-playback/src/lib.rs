//! Sonora Play - Playback Session
//!
//! Platform-agnostic playback state machine for Sonora Play.
//!
//! This crate provides:
//! - [`PlaybackSession`]: current track, transport commands, decoder ownership
//! - [`PlaybackMode`]: sequential / repeat-one / repeat-all / shuffle cycle
//! - [`PlaybackObserver`] and a non-owning [`ObserverRegistry`]
//! - [`EventCollector`]: queue events and drain them from a UI loop
//! - [`ProgressTicker`] and [`PlaybackProgress`] for the position display
//!
//! # Architecture
//!
//! `sonora-playback` knows nothing about audio devices or the filesystem.
//! Tracks come from a [`TrackCatalog`](sonora_core::TrackCatalog), audio
//! output from an [`AudioEngine`]. The desktop engine lives in
//! `sonora-audio-desktop`.
//!
//! # Example
//!
//! ```rust
//! use sonora_core::{Catalog, Track};
//! use sonora_playback::{
//!     AudioEngine, DecoderHandle, EventCollector, PlaybackError, PlaybackEvent,
//!     PlaybackSession, SessionState,
//! };
//! use std::path::{Path, PathBuf};
//! use std::sync::Arc;
//!
//! // An engine that can't open anything
//! struct Silent;
//!
//! impl AudioEngine for Silent {
//!     fn prepare(&mut self, path: &Path) -> sonora_playback::Result<Box<dyn DecoderHandle>> {
//!         Err(PlaybackError::prepare_failed(path, "no audio device"))
//!     }
//! }
//!
//! let catalog = Catalog::new(vec![
//!     Track::new("Intro", "Band", PathBuf::from("intro.mp3")),
//!     Track::new("Outro", "Band", PathBuf::from("outro.mp3")),
//! ]);
//!
//! let mut session = PlaybackSession::builder()
//!     .catalog(catalog)
//!     .engine(Silent)
//!     .build()
//!     .unwrap();
//!
//! let events = Arc::new(EventCollector::new());
//! session.add_observer(&events);
//!
//! session.start();
//! session.next();
//!
//! assert_eq!(session.current_track().unwrap().title, "Outro");
//! assert_eq!(session.state(), SessionState::Playing);
//! assert!(matches!(events.drain()[0], PlaybackEvent::TrackChanged { .. }));
//! ```

pub mod engine;
pub mod error;
pub mod events;
pub mod mode;
pub mod observer;
pub mod progress;
pub mod session;
pub mod ticker;
pub mod types;

pub use engine::{AudioEngine, DecoderHandle};
pub use error::{PlaybackError, Result};
pub use events::{EventCollector, PlaybackEvent};
pub use mode::PlaybackMode;
pub use observer::{ObserverId, ObserverRegistry, PlaybackObserver};
pub use progress::{format_time, PlaybackProgress, UNKNOWN_DURATION};
pub use session::{PlaybackSession, PlaybackSessionBuilder};
pub use ticker::{ProgressTick, ProgressTicker, DEFAULT_PROGRESS_INTERVAL};
pub use types::{PlaybackConfig, SessionState};
