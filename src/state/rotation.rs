//! Rotation Timer - Fixed-interval ticks for auto-advancing widgets
//!
//! Each [`Rotation`] owns one background timer thread. The thread never
//! touches widget state: it posts a tick over a channel every interval, and the
//! owning UI thread drains them with [`Rotation::take_tick`].
//!
//! The channel holds a single tick. Ticks posted while one is still pending
//! are dropped, so an owner that stops draining for a while resumes at the
//! normal cadence instead of replaying a backlog.
//!
//! # Pattern
//!
//! - `start` spawns a timer thread with a fresh channel and running flag
//! - `stop` clears the flag and drops the receiver; the thread exits on its
//!   next wake (we don't join, to avoid blocking the UI thread)
//! - Ticks posted before `stop` are discarded with the receiver, so a later
//!   `start` never sees stale ticks
//!
//! # Example
//!
//! ```ignore
//! use spark_slider::state::Rotation;
//! use std::time::Duration;
//!
//! let mut rotation = Rotation::new();
//! rotation.start(Duration::from_millis(2000));
//!
//! // In the UI loop
//! if rotation.take_tick() {
//!     advance();
//! }
//!
//! rotation.stop();
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::types::duration_millis;

/// A restartable fixed-interval ticker.
#[derive(Debug, Default)]
pub struct Rotation {
    /// Flag the timer thread polls after each sleep
    running: Option<Arc<AtomicBool>>,
    /// Ticks posted by the timer thread
    ticks: Option<Receiver<()>>,
    /// Interval of the current run
    interval: Option<Duration>,
}

impl Rotation {
    /// Create a stopped rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `interval`.
    ///
    /// Returns false (and does nothing) if already running or if `interval`
    /// is zero.
    pub fn start(&mut self, interval: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        // Guard against a zero interval (would spin)
        if interval.is_zero() {
            warn!("rotation interval is zero; not starting");
            return false;
        }

        let running = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::sync_channel(1);

        let flag = running.clone();
        let spawned = thread::Builder::new()
            .name("slider-rotation".to_string())
            .spawn(move || {
                while flag.load(Ordering::SeqCst) {
                    thread::sleep(interval);
                    if !flag.load(Ordering::SeqCst) {
                        break;
                    }
                    match tx.try_send(()) {
                        // A tick is already pending; coalesce
                        Ok(()) | Err(TrySendError::Full(())) => {}
                        // Receiver gone means the rotation was stopped or dropped
                        Err(TrySendError::Disconnected(())) => break,
                    }
                }
            });

        match spawned {
            // Detached: the thread exits on its own after stop
            Ok(_) => {
                debug!(interval_ms = duration_millis(interval), "rotation started");
                self.running = Some(running);
                self.ticks = Some(rx);
                self.interval = Some(interval);
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to spawn rotation timer");
                false
            }
        }
    }

    /// Stop ticking. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        let Some(running) = self.running.take() else {
            return false;
        };
        running.store(false, Ordering::SeqCst);
        self.ticks = None;
        self.interval = None;
        debug!("rotation stopped");
        true
    }

    /// Check if the timer is running.
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| running.load(Ordering::SeqCst))
    }

    /// Interval of the current run, if running.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Consume the pending tick, if any.
    ///
    /// However long the owner went without draining, this reports at most
    /// one tick.
    pub fn take_tick(&mut self) -> bool {
        let Some(rx) = self.ticks.as_ref() else {
            return false;
        };
        let mut ticked = false;
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(()) => ticked = true,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        // Timer thread died; treat as stopped
        if disconnected {
            self.stop();
        }
        ticked
    }
}

impl Drop for Rotation {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// TESTS
// =============================================================================
