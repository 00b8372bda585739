//! Interactive loop
//!
//! Multiplexes stdin lines and progress ticks on the main thread, which
//! is the only thread that touches the session.

use crate::commands::{Command, HELP};
use crate::presenter::TerminalPresenter;
use crossbeam_channel::{select, unbounded, Receiver};
use sonora_playback::PlaybackSession;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal controller state
pub struct Controller<'a, W: Write> {
    session: &'a mut PlaybackSession,
    presenter: &'a TerminalPresenter<W>,
    dragged_to: Option<Duration>,
}

impl<'a, W: Write> Controller<'a, W> {
    pub fn new(session: &'a mut PlaybackSession, presenter: &'a TerminalPresenter<W>) -> Self {
        Self {
            session,
            presenter,
            dragged_to: None,
        }
    }

    /// Parse and run one input line
    pub fn handle_line(&mut self, line: &str) -> Flow {
        if line.trim().is_empty() {
            return Flow::Continue;
        }
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                self.presenter.message(&e.to_string());
                Flow::Continue
            }
        }
    }

    /// Run one command against the session
    pub fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Play => self.session.play(),
            Command::Pause => self.session.pause(),
            Command::Toggle => self.session.toggle(),
            Command::Next => self.session.next(),
            Command::Previous => self.session.previous(),
            Command::Seek(position) => {
                self.session.seek(position);
                self.presenter.render_progress(self.session.progress());
                self.presenter.message("");
            }
            Command::Drag(position) => {
                if !self.session.is_seeking() {
                    self.session.begin_seek();
                }
                self.dragged_to = Some(position);
                self.presenter
                    .render_progress(self.session.preview_seek(position));
                self.presenter.message("");
            }
            Command::Release => match self.dragged_to.take() {
                Some(position) => self.session.commit_seek(position),
                None => self.presenter.message("Nothing to release (use 'drag' first)"),
            },
            Command::Volume(level) => {
                self.session.set_volume(f32::from(level) / 100.0);
                self.presenter
                    .message(&format!("Volume: {:.0}%", self.session.volume() * 100.0));
            }
            Command::Mode => {
                self.session.cycle_playback_mode();
            }
            Command::Status => self.presenter.render_status(self.session),
            Command::List => self
                .presenter
                .render_catalog(self.session.catalog(), self.session.current_index()),
            Command::Help => self.presenter.message(HELP),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Refresh on a progress tick
    pub fn on_tick(&mut self) {
        self.session.handle_completion();
        if !self.session.is_seeking() && self.session.is_playing() {
            self.presenter.render_progress(self.session.progress());
        }
    }

    /// True while a drag gesture is pending
    pub fn is_dragging(&self) -> bool {
        self.dragged_to.is_some()
    }
}

/// Read stdin on a background thread
///
/// The channel disconnects at end of input.
pub fn spawn_stdin_reader() -> io::Result<Receiver<String>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("sonora-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}

/// Run until `quit` or end of input
pub fn run<W: Write>(
    session: &mut PlaybackSession,
    presenter: &TerminalPresenter<W>,
    input: &Receiver<String>,
) -> anyhow::Result<()> {
    let ticks = session.start_progress_ticker()?;
    presenter.message("Type 'help' for commands.");

    {
        let mut controller = Controller::new(session, presenter);
        loop {
            select! {
                recv(input) -> line => match line {
                    Ok(line) => {
                        if controller.handle_line(&line) == Flow::Quit {
                            break;
                        }
                    }
                    Err(_) => break,
                },
                recv(ticks) -> tick => match tick {
                    Ok(_) => controller.on_tick(),
                    Err(_) => break,
                },
            }
        }
    }

    session.shutdown();
    Ok(())
}
