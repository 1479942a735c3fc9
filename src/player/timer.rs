//! Deadline-based auto-advance timer.
//!
//! The event loop is single threaded, so the timer is not a thread or a
//! task: it is a deadline the loop polls against. Dropping the value cancels
//! it; there is nothing left to fire.

use std::time::{Duration, Instant};

/// Default auto-advance period.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(1000);

/// Shortest period accepted from configuration.
pub const MIN_PERIOD: Duration = Duration::from_millis(50);

/// A recurring timer handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoAdvance {
    generation: u64,
    period: Duration,
    next_due: Instant,
}

impl AutoAdvance {
    /// Start a timer whose first tick is one period after `now`.
    pub fn start(generation: u64, period: Duration, now: Instant) -> Self {
        Self {
            generation,
            period,
            next_due: now + period,
        }
    }

    /// Identity of this timer; each start gets a fresh one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Time left until the next tick (zero when already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Consume one due tick and schedule the next.
    ///
    /// Periods missed while the loop was busy are dropped rather than
    /// replayed back to back.
    pub fn fire(&mut self, now: Instant) {
        self.next_due += self.period;
        if self.next_due <= now {
            self.next_due = now + self.period;
        }
    }
}
