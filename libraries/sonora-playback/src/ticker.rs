//! Fixed-period progress ticker
//!
//! A background thread that signals the UI to refresh the position
//! display. It never touches the session; the UI reacts to a tick by
//! reading [`PlaybackSession::progress`](crate::PlaybackSession::progress)
//! on its own thread.

use crate::error::{PlaybackError, Result};
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default refresh period
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// One refresh signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTick {
    /// Increments on every tick that was not suppressed
    pub seq: u64,
}

/// Handle to the ticker thread
///
/// Ticks are coalesced: at most one is ever waiting in the channel, so a
/// slow consumer never builds a backlog. While suspended (the user is
/// dragging the position control) no ticks are produced. Dropping the
/// handle stops and joins the thread.
pub struct ProgressTicker {
    cancel_tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
    suspended: Arc<AtomicBool>,
    interval: Duration,
}

impl ProgressTicker {
    /// Start ticking every `interval`
    ///
    /// # Errors
    /// Returns an error if the thread can't be spawned.
    pub fn spawn(interval: Duration) -> Result<(Self, Receiver<ProgressTick>)> {
        let (tick_tx, tick_rx) = bounded::<ProgressTick>(1);
        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let suspended = Arc::new(AtomicBool::new(false));
        let suspended_clone = suspended.clone();

        let thread = thread::Builder::new()
            .name("sonora-progress".to_string())
            .spawn(move || Self::run(interval, &cancel_rx, &tick_tx, &suspended_clone))
            .map_err(PlaybackError::Ticker)?;

        tracing::debug!("Progress ticker started ({:?})", interval);

        Ok((
            Self {
                cancel_tx: Some(cancel_tx),
                thread: Some(thread),
                suspended,
                interval,
            },
            tick_rx,
        ))
    }

    fn run(
        interval: Duration,
        cancel_rx: &Receiver<()>,
        tick_tx: &Sender<ProgressTick>,
        suspended: &AtomicBool,
    ) {
        let mut seq = 0;
        loop {
            match cancel_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {}
                // Cancelled, or the handle is gone
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }

            if suspended.load(Ordering::Acquire) {
                continue;
            }

            seq += 1;
            match tick_tx.try_send(ProgressTick { seq }) {
                Ok(()) | Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => break,
            }
        }
    }

    /// Stop producing ticks (seek gesture in progress)
    pub fn suspend(&self) {
        self.suspended.store(true, Ordering::Release);
    }

    /// Resume producing ticks
    pub fn resume(&self) {
        self.suspended.store(false, Ordering::Release);
    }

    /// Check if ticks are currently suppressed
    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::Acquire)
    }

    /// Tick period
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop the thread and wait for it to exit
    pub fn cancel(&mut self) {
        // Dropping the sender wakes the thread immediately
        self.cancel_tx.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("Progress ticker thread panicked");
            }
            tracing::debug!("Progress ticker stopped");
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
