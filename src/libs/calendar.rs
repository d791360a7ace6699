//! Calendar math for Monday-anchored school weeks.
//!
//! All functions are pure: the reference instant is passed in explicitly,
//! usually from a [`Clock`](crate::libs::clock::Clock).
//!
//! ## Week Boundaries
//!
//! ```text
//!  week_offset = -1         week_offset = 0 (contains now)   week_offset = 1
//! ┌──────────────────┐     ┌──────────────────────────────┐ ┌──────────────┐
//! │ Mon 00:00 .. Sun │ ──▶ │ Mon 00:00 .. Sun 23:59:59.9… │─▶│ Mon .. Sun   │
//! └──────────────────┘     └──────────────────────────────┘ └──────────────┘
//! ```
//!
//! Sunday always closes a week. When "now" is a Sunday the current week
//! started on the Monday six days earlier.
//!
//! Offsets that would leave chrono's supported dates fail with
//! [`CalendarError`] instead of wrapping or panicking.

use super::error::CalendarError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

/// Monday-to-Sunday boundaries of one calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekRange {
    /// Monday of the week at 00:00:00.
    pub start: NaiveDateTime,
    /// Sunday of the week at the last representable instant of the day.
    pub end: NaiveDateTime,
    /// Weeks away from the week containing the reference instant.
    pub week_offset: i32,
}

impl WeekRange {
    /// Inclusive containment check, see [`is_date_in_week_range`].
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        is_date_in_week_range(instant, self)
    }

    /// Monday through Sunday at start of day.
    pub fn days(&self) -> [NaiveDateTime; 7] {
        days_in_week(self)
    }

    /// Monday through Friday at start of day.
    pub fn weekdays(&self) -> Vec<NaiveDateTime> {
        self.days().into_iter().filter(|d| is_weekday(*d)).collect()
    }

    pub fn monday(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn sunday(&self) -> NaiveDate {
        self.end.date()
    }

    /// Human-readable span such as `13 Jan - 19 Jan 2025`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.start.format("%d %b"), self.end.format("%d %b %Y"))
    }
}

/// Midnight at the beginning of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last representable instant of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999999999 is always a valid time
    date.and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN))
}

/// Signed number of days from `weekday` back to the Monday of its week.
///
/// Sunday counts as day 7, so it maps to `-6` rather than `+1`.
fn days_since_monday(weekday: Weekday) -> i64 {
    1 - weekday.number_from_monday() as i64
}

/// Monday of the week containing `date`, if representable.
fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(days_since_monday(date.weekday())))
}

/// Computes the week that is `week_offset` weeks away from the week containing `now`.
///
/// # Errors
///
/// [`CalendarError::WeekOutOfRange`] when the Monday or Sunday of that week
/// is not a representable date.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use satchel::libs::calendar::week_range;
///
/// // Sunday 19 January 2025
/// let now = NaiveDate::from_ymd_opt(2025, 1, 19).unwrap().and_hms_opt(18, 0, 0).unwrap();
/// let range = week_range(0, now)?;
/// assert_eq!(range.monday(), NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
/// assert_eq!(range.sunday(), NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
/// assert!(week_range(i32::MAX, now).is_err());
/// # Ok::<(), satchel::libs::error::CalendarError>(())
/// ```
pub fn week_range(week_offset: i32, now: NaiveDateTime) -> Result<WeekRange, CalendarError> {
    let out_of_range = CalendarError::WeekOutOfRange(week_offset);
    let monday = monday_of(now.date())
        .and_then(|monday| monday.checked_add_signed(Duration::try_weeks(i64::from(week_offset))?))
        .ok_or(out_of_range)?;
    let sunday = monday.checked_add_signed(Duration::days(6)).ok_or(out_of_range)?;

    let range = WeekRange {
        start: start_of_day(monday),
        end: end_of_day(sunday),
        week_offset,
    };
    tracing::trace!(week_offset, start = %range.start, end = %range.end, "computed week range");
    Ok(range)
}

/// Week offset, relative to the week containing `now`, of the week containing `date`.
pub fn week_offset_of(date: NaiveDate, now: NaiveDateTime) -> Result<i32, CalendarError> {
    let current_monday = monday_of(now.date()).ok_or(CalendarError::DateOutOfRange(now.date()))?;
    let target_monday = monday_of(date).ok_or(CalendarError::DateOutOfRange(date))?;
    i32::try_from((target_monday - current_monday).num_days() / 7).map_err(|_| CalendarError::DateOutOfRange(date))
}

/// Enumerates the seven calendar days of `range`, Monday first.
pub fn days_in_week(range: &WeekRange) -> [NaiveDateTime; 7] {
    let monday = range.start.date();
    std::array::from_fn(|i| start_of_day(monday + Duration::days(i as i64)))
}

pub fn is_weekend(instant: NaiveDateTime) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_weekday(instant: NaiveDateTime) -> bool {
    !is_weekend(instant)
}

/// Compares year, month and day of month; time of day is ignored.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Inclusive bounds check against the range's start and end instants.
pub fn is_date_in_week_range(instant: NaiveDateTime, range: &WeekRange) -> bool {
    instant >= range.start && instant <= range.end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn week_starts_on_monday_for_every_weekday() {
        // 2025-01-13 is a Monday
        let monday = NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
        for i in 0..7 {
            let now = at(2025, 1, 13 + i, 10);
            let range = week_range(0, now).unwrap();
            assert_eq!(range.monday(), monday, "weekday offset {}", i);
            assert_eq!(range.sunday(), NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
        }
    }

    #[test]
    fn sunday_anchors_to_the_monday_already_passed() {
        let sunday = at(2025, 1, 19, 23);
        let range = week_range(0, sunday).unwrap();
        assert_eq!(range.start, at(2025, 1, 13, 0));
        assert_eq!(range.start.weekday(), Weekday::Mon);
    }

    #[test]
    fn boundaries_carry_start_and_end_of_day() {
        let range = week_range(0, at(2025, 1, 15, 9)).unwrap();
        assert_eq!(range.start.time(), NaiveTime::MIN);
        assert_eq!(range.end.time(), NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap());
        assert_eq!(range.end.date() - range.start.date(), Duration::days(6));
    }

    #[test]
    fn offsets_move_by_whole_weeks() {
        let now = at(2025, 3, 5, 8);
        for offset in -60..60 {
            let range = week_range(offset, now).unwrap();
            let next = week_range(offset + 1, now).unwrap();
            assert_eq!(range.start.weekday(), Weekday::Mon);
            assert_eq!(range.end.weekday(), Weekday::Sun);
            assert_eq!(next.start - range.start, Duration::days(7));
            assert_eq!(range.week_offset, offset);
        }
    }

    #[test]
    fn offsets_cross_year_boundaries() {
        // Wednesday 1 January 2025 belongs to the week starting Monday 30 December 2024
        let range = week_range(0, at(2025, 1, 1, 12)).unwrap();
        assert_eq!(range.monday(), NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        let previous = week_range(-1, at(2025, 1, 1, 12)).unwrap();
        assert_eq!(previous.monday(), NaiveDate::from_ymd_opt(2024, 12, 23).unwrap());
    }

    #[test]
    fn days_in_week_are_consecutive() {
        let range = week_range(2, at(2024, 2, 28, 12)).unwrap();
        let days = days_in_week(&range);
        assert_eq!(days.len(), 7);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert_eq!(days.iter().filter(|d| is_weekday(**d)).count(), 5);
        assert_eq!(days.iter().filter(|d| is_weekend(**d)).count(), 2);
        assert_eq!(range.weekdays().len(), 5);
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        assert!(is_same_day(at(2025, 1, 15, 0), at(2025, 1, 15, 23)));
        assert!(!is_same_day(at(2025, 1, 15, 23), at(2025, 1, 16, 0)));
    }

    #[test]
    fn week_range_bounds_are_inclusive() {
        let range = week_range(0, at(2025, 1, 15, 12)).unwrap();
        assert!(is_date_in_week_range(range.start, &range));
        assert!(is_date_in_week_range(range.end, &range));
        assert!(range.contains(at(2025, 1, 19, 23)));
        assert!(!range.contains(at(2025, 1, 20, 0)));
        assert!(!range.contains(range.start - Duration::nanoseconds(1)));
    }

    #[test]
    fn week_offset_of_round_trips_through_week_range() {
        let now = at(2025, 1, 15, 12);
        assert_eq!(week_offset_of(NaiveDate::from_ymd_opt(2025, 1, 19).unwrap(), now).unwrap(), 0);
        assert_eq!(week_offset_of(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(), now).unwrap(), -1);
        assert_eq!(week_offset_of(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(), now).unwrap(), 1);
        for offset in -10..10 {
            let range = week_range(offset, now).unwrap();
            assert_eq!(week_offset_of(range.sunday(), now).unwrap(), offset);
        }
    }

    #[test]
    fn label_spans_monday_to_sunday() {
        let range = week_range(0, at(2025, 1, 15, 12)).unwrap();
        assert_eq!(range.label(), "13 Jan - 19 Jan 2025");
    }

    #[test]
    fn extreme_offsets_are_reported_instead_of_overflowing() {
        let now = at(2025, 1, 15, 12);
        assert_eq!(week_range(i32::MAX, now), Err(CalendarError::WeekOutOfRange(i32::MAX)));
        assert_eq!(week_range(i32::MIN, now), Err(CalendarError::WeekOutOfRange(i32::MIN)));
        assert!(week_range(99_999_999, now).is_err());
        // the last week chrono can hold still works
        assert!(week_range(0, NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap() - Duration::days(7)).is_ok());
    }

    #[test]
    fn weeks_at_the_calendar_edges_fail_cleanly() {
        let first = NaiveDate::MIN.and_hms_opt(12, 0, 0).unwrap();
        let last = NaiveDate::MAX.and_hms_opt(12, 0, 0).unwrap();
        // a Monday before MIN or a Sunday after MAX cannot be represented
        if first.weekday() != Weekday::Mon {
            assert!(week_range(0, first).is_err());
            assert!(week_offset_of(first.date(), at(2025, 1, 15, 12)).is_err());
        }
        if last.weekday() != Weekday::Sun {
            assert!(week_range(0, last).is_err());
        }
        assert!(week_range(1, last).is_err());
        assert!(week_range(-1, first).is_err());
    }
}
