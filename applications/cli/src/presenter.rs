//! Terminal presenter
//!
//! Renders session notifications and progress as text lines.

use sonora_core::{Catalog, Track};
use sonora_playback::{PlaybackMode, PlaybackObserver, PlaybackProgress, PlaybackSession, SessionState};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

const BAR_WIDTH: usize = 30;

/// Writes the player view to a terminal (or any writer)
pub struct TerminalPresenter<W: Write> {
    out: Mutex<W>,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl TerminalPresenter<Vec<u8>> {
    /// Everything written so far (for tests)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Overwrite the current line with the progress bar
    pub fn render_progress(&self, progress: PlaybackProgress) {
        self.write(format_args!("\r{}", progress_line(progress)), false);
    }

    /// Current track, state, mode and position
    pub fn render_status(&self, session: &PlaybackSession) {
        let state = match session.state() {
            SessionState::Empty => "empty",
            SessionState::Paused => "paused",
            SessionState::Playing => "playing",
        };
        match session.current_track() {
            Some(track) => self.line(format_args!("{}", track_line(track))),
            None => self.line(format_args!("Nothing to play")),
        }
        self.line(format_args!(
            "{} | mode: {} | volume: {:.0}%",
            state,
            session.mode(),
            session.volume() * 100.0
        ));
        self.line(format_args!("{}", progress_line(session.progress())));
    }

    /// Numbered catalog, marking the current track
    pub fn render_catalog(&self, catalog: &Catalog, current: Option<usize>) {
        if catalog.is_empty() {
            self.line(format_args!("Catalog is empty"));
            return;
        }
        for (index, track) in catalog.iter().enumerate() {
            let marker = if Some(index) == current { '>' } else { ' ' };
            self.line(format_args!(
                "{} {:>3}. {} - {}",
                marker,
                index + 1,
                track.title,
                track.artist
            ));
        }
    }

    /// Plain message line
    pub fn message(&self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        self.write(args, true);
    }

    fn write(&self, args: fmt::Arguments<'_>, newline: bool) {
        let mut out = self.lock();
        let result = if newline {
            writeln!(out, "{args}")
        } else {
            write!(out, "{args}")
        }
        .and_then(|()| out.flush());

        if let Err(e) = result {
            tracing::debug!("Terminal write failed: {}", e);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> PlaybackObserver for TerminalPresenter<W> {
    fn on_track_changed(&self, track: Option<&Track>) {
        match track {
            Some(track) => self.line(format_args!("\nNow playing: {}", track_line(track))),
            None => self.line(format_args!("\nNothing to play. Add audio files to the storage directory.")),
        }
    }

    fn on_play_state_changed(&self, is_playing: bool) {
        self.line(format_args!(
            "\n[{}]",
            if is_playing { "playing" } else { "paused" }
        ));
    }

    fn on_mode_changed(&self, mode: PlaybackMode) {
        self.line(format_args!("\nMode: {mode}"));
    }
}

/// `title - artist [cover]`
pub fn track_line(track: &Track) -> String {
    let cover = match &track.artwork {
        Some(artwork) => format!("cover: {}, {} bytes", artwork.mime_type, artwork.len()),
        None => "default cover".to_string(),
    };
    format!("{} - {} [{}]", track.title, track.artist, cover)
}

/// `[=======>      ] 01:02 / 03:30`
pub fn progress_line(progress: PlaybackProgress) -> String {
    let filled = ((progress.ratio() * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    let mut bar = "=".repeat(filled);
    if filled < BAR_WIDTH {
        bar.push('>');
        bar.push_str(&" ".repeat(BAR_WIDTH - filled - 1));
    }
    format!("[{bar}] {progress}")
}
