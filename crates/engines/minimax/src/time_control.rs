//! Move-time limit and stop flag for a running search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// How often (in nodes) the search reads the clock.
pub const CHECK_INTERVAL: u64 = 1024;

/// Thread-safe time controller that tracks whether a search should stop.
///
/// Clones share the same stop flag and start time, so one clone can be
/// handed to another thread and used to stop a search in progress.
/// `is_stopped` is a single atomic load; the clock itself is only read by
/// `check_time`.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<Mutex<Option<Instant>>>,
    /// None = no limit
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(Mutex::new(None)),
            time_limit,
        }
    }

    /// Starts the clock and clears the stop flag.
    pub fn start(&self) {
        *self.lock_start() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Stops the search at its next poll.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag once the limit has passed.
    /// Returns whether the search should stop.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let (Some(limit), Some(start)) = (self.time_limit, *self.lock_start()) {
            if start.elapsed() >= limit {
                self.stop();
                return true;
            }
        }

        false
    }

    /// True every [`CHECK_INTERVAL`] nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % CHECK_INTERVAL == 0
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.lock_start()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Time left before the limit (None if there is no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    fn lock_start(&self) -> std::sync::MutexGuard<'_, Option<Instant>> {
        self.start_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
