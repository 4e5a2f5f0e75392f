// SPDX-License-Identifier: MPL-2.0
//! Cancellable countdowns measured against a swappable clock.
//!
//! A countdown is just a start instant and a length. "Cancelling" one means
//! dropping it from the provider's registry; the tick subscription only ever
//! fires countdowns that are still registered, so a cancelled countdown can
//! never remove anything.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time for countdowns.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the provider.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// One running auto-dismiss countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started_at: Instant,
    duration: Duration,
}

impl Countdown {
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Time left before the deadline, saturating at zero.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline().saturating_duration_since(now)
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let before = clock.now();

        handle.advance(Duration::from_millis(250));

        assert_eq!(clock.now() - before, Duration::from_millis(250));
    }

    #[test]
    fn countdown_is_due_exactly_at_deadline() {
        let clock = ManualClock::new();
        let countdown = Countdown::start(clock.now(), Duration::from_secs(1));

        clock.advance(Duration::from_millis(999));
        assert!(!countdown.is_due(clock.now()));

        clock.advance(Duration::from_millis(1));
        assert!(countdown.is_due(clock.now()));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let clock = ManualClock::new();
        let countdown = Countdown::start(clock.now(), Duration::from_millis(100));

        clock.advance(Duration::from_secs(5));

        assert_eq!(countdown.remaining(clock.now()), Duration::ZERO);
    }

    #[test]
    fn remaining_tracks_elapsed_time() {
        let clock = ManualClock::new();
        let countdown = Countdown::start(clock.now(), Duration::from_secs(4));

        clock.advance(Duration::from_secs(1));

        assert_eq!(countdown.remaining(clock.now()), Duration::from_secs(3));
    }
}
