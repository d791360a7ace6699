//! Sources of "now" for calendar and attendance calculations.
//!
//! Every calculation in the library takes its reference instant as an explicit
//! argument. The [`Clock`] trait is how callers obtain that instant: the CLI
//! uses [`SystemClock`], tests pin time with [`FixedClock`].

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Provider of the current local wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// The calendar day of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Fixes the clock at noon of the given day.
    pub fn at_noon(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let clock = FixedClock::at_noon(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.now(), date.and_hms_opt(12, 0, 0).unwrap());
    }
}
