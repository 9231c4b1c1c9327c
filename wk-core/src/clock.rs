//! Time sources for "today" and creation timestamps.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::atomic::{AtomicI64, Ordering};

/// Capability for reading the local wall clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to a given instant.
///
/// Every reading advances the clock by one millisecond so entries created in a row
/// keep distinct, increasing creation timestamps.
#[derive(Debug)]
pub struct FixedClock {
    start: NaiveDateTime,
    ticks: AtomicI64,
}

impl FixedClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }

    /// Noon on `date`, far enough from midnight that ticking never changes the day.
    pub fn on(date: NaiveDate) -> Self {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).expect("valid time");
        Self::new(date.and_time(noon))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.start + Duration::milliseconds(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_stays_on_its_day() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.today(), date);
    }

    #[test]
    fn fixed_clock_readings_increase() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
        let first = clock.now();
        let second = clock.now();
        assert!(second > first);
    }
}
