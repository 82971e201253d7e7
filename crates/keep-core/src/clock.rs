//! Time sources for note timestamps.

use std::cell::Cell;

/// Source of Unix millisecond timestamps.
pub trait Clock {
    /// Current time in Unix milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for deterministic timestamps.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    /// Create a clock frozen at `start` (Unix ms).
    #[must_use]
    pub const fn new(start: i64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `millis`.
    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }

    /// Jump the clock to an absolute time, including backwards.
    pub fn set(&self, millis: i64) {
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances_and_rewinds() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_millis(), 1_000);

        clock.advance(250);
        assert_eq!(clock.now_millis(), 1_250);

        clock.set(10);
        assert_eq!(clock.now_millis(), 10);
    }

    #[test]
    fn system_clock_is_after_epoch() {
        assert!(SystemClock.now_millis() > 0);
    }
}
