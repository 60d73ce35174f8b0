//! Wall clock abstraction used by the lifecycle manager.
//!
//! Timestamps are persisted with second precision (`YYYY-MM-DD HH:MM:SS`),
//! so every clock reading is truncated to whole seconds. A task loaded back
//! from disk is then equal to the one that was saved.
//!
//! ```rust
//! use chrono::Duration;
//! use tasktrack::libs::clock::{Clock, MockClock};
//!
//! let clock = MockClock::default();
//! let start = clock.now();
//! clock.advance(Duration::seconds(10));
//! assert_eq!(clock.now() - start, Duration::seconds(10));
//! ```

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use std::sync::{Arc, Mutex};

/// Source of the current local time.
pub trait Clock {
    /// Current local time, truncated to whole seconds.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_seconds(Local::now().naive_local())
    }
}

/// Manually driven clock for deterministic tests.
///
/// Clones share the same underlying time, so a test can keep a handle while
/// the manager owns another.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl MockClock {
    pub fn at(time: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(truncate_to_seconds(time))),
        }
    }

    /// Moves the clock forward without waiting.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = truncate_to_seconds(*current + by);
    }
}

impl Default for MockClock {
    /// Starts at 2024-01-15 09:00:00.
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .unwrap_or_default();
        Self::at(start)
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn truncate_to_seconds(time: NaiveDateTime) -> NaiveDateTime {
    time.with_nanosecond(0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_has_no_subsecond_part() {
        assert_eq!(SystemClock.now().nanosecond(), 0);
    }

    #[test]
    fn test_mock_clock_clones_share_time() {
        let clock = MockClock::default();
        let handle = clock.clone();
        let before = clock.now();

        handle.advance(Duration::minutes(3));

        assert_eq!(clock.now() - before, Duration::minutes(3));
    }

    #[test]
    fn test_mock_clock_truncates_subseconds() {
        let clock = MockClock::default();
        clock.advance(Duration::milliseconds(1500));
        assert_eq!(clock.now().nanosecond(), 0);
    }
}
