//! Simulated clock owned by the generator.

use chrono::{Duration, NaiveDateTime};

/// An explicitly advancing simulated clock.
///
/// The generator owns one clock per run; there is no shared or global time.
/// Every advance is at least the minimum gap, so timestamps read from the
/// clock between advances strictly increase.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use freightlog_core::sim::clock::SimClock;
///
/// let start = NaiveDate::from_ymd_opt(2025, 4, 29)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let mut clock = SimClock::new(start);
/// clock.advance_minutes(30);
/// assert_eq!(clock.now() - start, chrono::Duration::minutes(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimClock {
    now: NaiveDateTime,
}

impl SimClock {
    /// Create a clock positioned at `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: start }
    }

    /// The current simulated instant.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Move the clock forward by `minutes`.
    pub fn advance_minutes(&mut self, minutes: i64) {
        self.now = self.now + Duration::minutes(minutes);
    }
}
