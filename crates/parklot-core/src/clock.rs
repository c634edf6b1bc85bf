//! # Clock
//!
//! Source of wall-clock timestamps for check-in and check-out.
//!
//! The facility never reads the host clock directly; it asks its `Clock`.
//! `SystemClock` is the production clock. `ManualClock` only moves when told
//! to, which makes fares reproducible in tests and benchmarks.

use crate::types::Timestamp;
use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

// =============================================================================
// CLOCK TRAIT
// =============================================================================

/// A source of the current wall-clock time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

// =============================================================================
// SYSTEM CLOCK
// =============================================================================

/// The host wall clock, read at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => Timestamp::from_millis(i64::try_from(d.as_millis()).unwrap_or(i64::MAX)),
            // Host clock set before 1970.
            Err(e) => Timestamp::from_millis(
                i64::try_from(e.duration().as_millis())
                    .map(|m| -m)
                    .unwrap_or(i64::MIN),
            ),
        }
    }
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

/// A clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, at: Timestamp) {
        self.now.set(at);
    }

    /// Move the clock by a signed number of seconds. Negative values wind it back.
    pub fn advance_seconds(&self, secs: i64) {
        self.now
            .set(self.now.get().offset_millis(secs.saturating_mul(1000)));
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance_seconds(minutes.saturating_mul(60));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(Timestamp::from_secs(10));
        assert_eq!(clock.now(), Timestamp::from_secs(10));
        assert_eq!(clock.now(), Timestamp::from_secs(10));

        clock.advance_minutes(2);
        assert_eq!(clock.now(), Timestamp::from_secs(130));

        clock.advance_seconds(-30);
        assert_eq!(clock.now(), Timestamp::from_secs(100));

        clock.set(Timestamp::from_millis(5));
        assert_eq!(clock.now(), Timestamp::from_millis(5));
    }

    #[test]
    fn clock_by_reference() {
        let clock = ManualClock::new(Timestamp::from_secs(7));
        let borrowed: &ManualClock = &clock;
        assert_eq!(Clock::now(&borrowed), Timestamp::from_secs(7));
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now() > Timestamp::from_secs(1_577_836_800));
    }
}
