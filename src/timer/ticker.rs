//! The one-second tick source.
//!
//! The timer never reads the clock; the UI loop owns a `Ticker` and drains
//! whole elapsed seconds from it each iteration. The ticker is armed only
//! while the timer is running and must be stopped on every exit path (pause,
//! reset, session expiry, app teardown) so nothing keeps firing after the
//! screen is gone.

use std::time::{Duration, Instant};

const SECOND: Duration = Duration::from_secs(1);

/// A scoped periodic signal source.
///
/// Disarmed by default. While armed, [`Ticker::poll`] yields one tick per
/// whole second elapsed since arming, catching up if the caller polls late so
/// ticks are never lost to a slow render loop.
#[derive(Debug, Clone)]
pub struct Ticker {
    deadline: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the ticker. The first tick comes due one second from now.
    /// Re-arming an armed ticker keeps its existing schedule.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Disarm the ticker, dropping any pending tick.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    /// Check if the ticker is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Number of ticks that have come due since the last poll.
    pub fn poll(&mut self) -> u32 {
        self.poll_at(Instant::now())
    }

    fn start_at(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + SECOND);
        }
    }

    fn poll_at(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.deadline else {
            return 0;
        };

        let mut due = 0;
        while deadline <= now {
            due += 1;
            deadline += SECOND;
        }
        self.deadline = Some(deadline);
        due
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
