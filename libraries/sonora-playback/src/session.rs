//! Playback session
//!
//! Owns the current index, the playback mode and the single live decoder
//! handle. Every transport command has the same shape: move the index or
//! mode, re-point the decoder, command it, notify observers.

use crate::engine::{AudioEngine, DecoderHandle};
use crate::error::{PlaybackError, Result};
use crate::mode::PlaybackMode;
use crate::observer::{ObserverId, ObserverRegistry, PlaybackObserver};
use crate::progress::{PlaybackProgress, UNKNOWN_DURATION};
use crate::ticker::{ProgressTick, ProgressTicker};
use crate::types::{PlaybackConfig, SessionState};
use crossbeam_channel::Receiver;
use sonora_core::{Catalog, Track, TrackCatalog};
use std::sync::Arc;
use std::time::Duration;

/// Playback session
///
/// Transport commands never fail: decoder problems are logged and the
/// session degrades to "nothing happens" rather than surfacing errors.
pub struct PlaybackSession {
    // Declared first so the handle is released before the engine
    decoder: Option<Box<dyn DecoderHandle>>,
    engine: Box<dyn AudioEngine>,
    source: Box<dyn TrackCatalog>,

    catalog: Catalog,
    index: usize,
    mode: PlaybackMode,
    is_playing: bool,
    volume: f32,

    observers: ObserverRegistry,

    ticker: Option<ProgressTicker>,
    progress_interval: Duration,
    seeking: bool,
}

impl PlaybackSession {
    /// Start building a session
    pub fn builder() -> PlaybackSessionBuilder {
        PlaybackSessionBuilder::default()
    }

    // ===== Lifecycle =====

    /// Load the catalog and cue the first track
    ///
    /// Empty catalog: enters [`SessionState::Empty`] and notifies "no
    /// track". Otherwise prepares track 0 paused and notifies it.
    pub fn start(&mut self) {
        self.decoder = None;
        self.is_playing = false;
        self.index = 0;
        self.catalog = self.source.load();

        if self.catalog.is_empty() {
            tracing::info!("Nothing to play: catalog is empty");
            self.observers.notify(|o| o.on_track_changed(None));
            return;
        }

        tracing::debug!("Session started with {} tracks", self.catalog.len());
        self.prepare_current();
        self.notify_track_changed();
    }

    /// Re-read the catalog and start over from the first track
    pub fn reload(&mut self) {
        let was_playing = self.is_playing;
        self.start();
        if was_playing {
            self.observers.notify(|o| o.on_play_state_changed(false));
        }
    }

    /// Release the decoder and stop the progress ticker
    ///
    /// Called automatically on drop.
    pub fn shutdown(&mut self) {
        if self.decoder.take().is_some() {
            tracing::debug!("Released decoder");
        }
        self.stop_progress_ticker();
        self.is_playing = false;
    }

    // ===== Transport =====

    /// Start or resume playback of the current track
    ///
    /// Re-prepares the decoder if the last prepare failed. On an empty
    /// catalog the engine is left alone and the state stays Empty, but
    /// observers still hear the play request.
    pub fn play(&mut self) {
        if self.catalog.is_empty() {
            tracing::debug!("play() ignored: catalog is empty");
            self.observers.notify(|o| o.on_play_state_changed(true));
            return;
        }

        if self.decoder.is_none() {
            self.prepare_current();
        }
        if let Some(decoder) = self.decoder.as_mut() {
            decoder.play();
        }

        self.is_playing = true;
        tracing::debug!("Playing track {}", self.index);
        self.observers.notify(|o| o.on_play_state_changed(true));
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if let Some(decoder) = self.decoder.as_mut() {
            decoder.pause();
        }

        self.is_playing = false;
        tracing::debug!("Paused track {}", self.index);
        self.observers.notify(|o| o.on_play_state_changed(false));
    }

    /// Pause if playing, play otherwise
    pub fn toggle(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Skip to the next track, wrapping at the end
    ///
    /// Always resumes playback.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.index = advance(self.index, self.catalog.len());
        self.play_current_from_start();
    }

    /// Go back to the previous track, wrapping at the start
    ///
    /// Always resumes playback.
    pub fn previous(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.index = retreat(self.index, self.catalog.len());
        self.play_current_from_start();
    }

    /// Seek within the current track
    ///
    /// No observer notification: the UI already shows the requested
    /// position.
    pub fn seek(&mut self, position: Duration) {
        let Some(decoder) = self.decoder.as_mut() else {
            tracing::debug!("seek() ignored: {}", PlaybackError::NoTrackLoaded);
            return;
        };

        if let Err(e) = decoder.seek(position) {
            tracing::warn!("Seek to {:?} failed: {}", position, e);
        }
    }

    /// Set volume as a fraction, clamped to `[0, 1]`
    pub fn set_volume(&mut self, level: f32) {
        self.volume = clamp_volume(level);
        if let Some(decoder) = self.decoder.as_mut() {
            decoder.set_volume(self.volume);
        }
    }

    /// Advance to the next playback mode and notify observers
    ///
    /// The mode is recorded but does not change how `next`/`previous`
    /// move through the catalog.
    pub fn cycle_playback_mode(&mut self) -> PlaybackMode {
        self.mode = self.mode.next();
        tracing::debug!("Playback mode: {}", self.mode);

        let mode = self.mode;
        self.observers.notify(|o| o.on_mode_changed(mode));
        mode
    }

    /// React to the current track having played to its end
    ///
    /// Moves to paused and notifies observers. Returns true if a
    /// completion was handled.
    pub fn handle_completion(&mut self) -> bool {
        let finished = self
            .decoder
            .as_ref()
            .is_some_and(|decoder| decoder.is_finished());

        if !self.is_playing || !finished {
            return false;
        }

        tracing::debug!("Track {} finished", self.index);
        self.is_playing = false;
        self.observers.notify(|o| o.on_play_state_changed(false));
        true
    }

    // ===== Seek gesture =====

    /// User started dragging the position control
    pub fn begin_seek(&mut self) {
        self.seeking = true;
        if let Some(ticker) = &self.ticker {
            ticker.suspend();
        }
    }

    /// Progress to display while dragging; the decoder is not touched
    pub fn preview_seek(&self, position: Duration) -> PlaybackProgress {
        let duration = self.duration();
        PlaybackProgress::new(position.min(duration), duration)
    }

    /// User released the position control: seek and resume ticking
    pub fn commit_seek(&mut self, position: Duration) {
        self.seek(position);
        self.seeking = false;
        if let Some(ticker) = &self.ticker {
            ticker.resume();
        }
    }

    /// Check if a seek gesture is in progress
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    // ===== Progress =====

    /// Start the progress ticker, replacing any running one
    ///
    /// The session owns the ticker; it is cancelled by
    /// [`stop_progress_ticker`](Self::stop_progress_ticker), `shutdown`
    /// or drop, after which the receiver disconnects.
    ///
    /// # Errors
    /// Returns an error if the ticker thread can't be spawned.
    pub fn start_progress_ticker(&mut self) -> Result<Receiver<ProgressTick>> {
        self.stop_progress_ticker();

        let (ticker, ticks) = ProgressTicker::spawn(self.progress_interval)?;
        if self.seeking {
            ticker.suspend();
        }
        self.ticker = Some(ticker);
        Ok(ticks)
    }

    /// Cancel the progress ticker if running
    pub fn stop_progress_ticker(&mut self) {
        // Drop joins the thread
        self.ticker = None;
    }

    /// Check if the progress ticker is running
    pub fn has_progress_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Current position (zero when nothing is prepared)
    pub fn current_time(&self) -> Duration {
        self.decoder
            .as_ref()
            .map_or(Duration::ZERO, |decoder| decoder.current_time())
    }

    /// Track length
    ///
    /// Strictly positive: [`UNKNOWN_DURATION`] when no decoder is prepared
    /// or its length is unknown.
    pub fn duration(&self) -> Duration {
        self.decoder
            .as_ref()
            .and_then(|decoder| decoder.duration())
            .filter(|duration| !duration.is_zero())
            .unwrap_or(UNKNOWN_DURATION)
    }

    /// Position snapshot for the progress display
    pub fn progress(&self) -> PlaybackProgress {
        PlaybackProgress::new(self.current_time(), self.duration())
    }

    // ===== Observers =====

    /// Register an observer (held weakly)
    pub fn add_observer<O: PlaybackObserver + 'static>(&mut self, observer: &Arc<O>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Unregister an observer
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    // ===== State Queries =====

    /// Current session state
    pub fn state(&self) -> SessionState {
        if self.catalog.is_empty() {
            SessionState::Empty
        } else if self.is_playing {
            SessionState::Playing
        } else {
            SessionState::Paused
        }
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Index of the current track (`None` when the catalog is empty)
    pub fn current_index(&self) -> Option<usize> {
        (!self.catalog.is_empty()).then_some(self.index)
    }

    /// The current track
    pub fn current_track(&self) -> Option<&Track> {
        self.catalog.get(self.index)
    }

    /// Check if a decoder is prepared for the current track
    pub fn has_decoder(&self) -> bool {
        self.decoder.is_some()
    }

    /// Current playback mode
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Current volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ===== Internals =====

    /// Replace the decoder with one for the current index
    ///
    /// On failure the decoder stays absent so the next `play()` retries.
    fn prepare_current(&mut self) {
        // Never two live handles
        self.decoder = None;

        let Some(track) = self.catalog.get(self.index) else {
            return;
        };

        match self.engine.prepare(&track.path) {
            Ok(mut decoder) => {
                decoder.set_volume(self.volume);
                tracing::debug!("Prepared {}", track.path.display());
                self.decoder = Some(decoder);
            }
            Err(e) => {
                tracing::error!("Could not prepare \"{}\": {}", track.title, e);
            }
        }
    }

    fn play_current_from_start(&mut self) {
        self.prepare_current();
        if let Some(decoder) = self.decoder.as_mut() {
            decoder.play();
        }
        self.is_playing = true;

        self.notify_track_changed();
        self.observers.notify(|o| o.on_play_state_changed(true));
    }

    fn notify_track_changed(&mut self) {
        let track = self.catalog.get(self.index);
        self.observers.notify(|o| o.on_track_changed(track));
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("tracks", &self.catalog.len())
            .field("index", &self.index)
            .field("mode", &self.mode)
            .field("is_playing", &self.is_playing)
            .field("volume", &self.volume)
            .field("has_decoder", &self.decoder.is_some())
            .field("seeking", &self.seeking)
            .finish_non_exhaustive()
    }
}

/// Builder for [`PlaybackSession`]
///
/// The surrounding app assembles the session once at startup.
#[derive(Default)]
pub struct PlaybackSessionBuilder {
    source: Option<Box<dyn TrackCatalog>>,
    engine: Option<Box<dyn AudioEngine>>,
    config: PlaybackConfig,
}

impl PlaybackSessionBuilder {
    /// Where tracks come from
    #[must_use]
    pub fn catalog(mut self, catalog: impl TrackCatalog + 'static) -> Self {
        self.source = Some(Box::new(catalog));
        self
    }

    /// Audio output
    #[must_use]
    pub fn engine(mut self, engine: impl AudioEngine + 'static) -> Self {
        self.engine = Some(Box::new(engine));
        self
    }

    /// Initial volume, mode and progress interval
    #[must_use]
    pub fn config(mut self, config: PlaybackConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the session
    ///
    /// The session starts out empty; call [`PlaybackSession::start`] to
    /// load the catalog.
    ///
    /// # Errors
    /// Returns [`PlaybackError::MissingCollaborator`] if the catalog or
    /// engine was not provided.
    pub fn build(self) -> Result<PlaybackSession> {
        let source = self
            .source
            .ok_or(PlaybackError::MissingCollaborator("catalog"))?;
        let engine = self
            .engine
            .ok_or(PlaybackError::MissingCollaborator("audio engine"))?;

        Ok(PlaybackSession {
            decoder: None,
            engine,
            source,
            catalog: Catalog::empty(),
            index: 0,
            mode: self.config.mode,
            is_playing: false,
            volume: clamp_volume(self.config.volume),
            observers: ObserverRegistry::new(),
            ticker: None,
            progress_interval: self.config.progress_interval(),
            seeking: false,
        })
    }
}

/// Index after `index` in a catalog of `len` tracks
pub(crate) fn advance(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Index before `index` in a catalog of `len` tracks
pub(crate) fn retreat(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

fn clamp_volume(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}
