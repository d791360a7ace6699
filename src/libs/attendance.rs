//! Attendance aggregation over Monday-anchored weeks.
//!
//! Two ways of turning raw daily records into a percentage:
//!
//! - **Whole-week summary** ([`weekly_attendance`]): a historical tally of the
//!   records that fall inside a week, whether or not those days have happened.
//! - **Truncated percentage** ([`truncated_attendance`],
//!   [`current_week_attendance`]): only weekdays up to and including today are
//!   considered. Each considered day is present when a record exists for it
//!   with `present = true`; a missing record or an explicit absence counts as
//!   not present. Days still ahead are never counted.
//!
//! ## Formula
//!
//! ```text
//! percentage = round(present_days / considered_days * 100)   (0 when no days)
//! ```

use super::calendar::{days_in_week, is_date_in_week_range, is_same_day, is_weekday, start_of_day, week_range, WeekRange};
use super::error::CalendarError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One weekday's attendance outcome for one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(with = "record_date")]
    pub date: NaiveDateTime,
    pub present: bool,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDateTime, present: bool) -> Self {
        AttendanceRecord { date, present }
    }

    /// Record at the start of `date`.
    pub fn on(date: NaiveDate, present: bool) -> Self {
        AttendanceRecord::new(start_of_day(date), present)
    }
}

/// Outcome for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    NoRecord,
}

/// Tally of the records inside one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyAttendanceSummary {
    pub week_range: WeekRange,
    pub total_days: u32,
    pub present_days: u32,
    pub absent_days: u32,
    pub percentage: u32,
    pub records: Vec<AttendanceRecord>,
}

/// Percentage over the weekdays that have already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncatedAttendance {
    pub considered_days: u32,
    pub present_days: u32,
    pub percentage: u32,
}

/// Rounded share of `part` in `whole`, `0` for an empty whole.
pub fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

/// Counts every record that falls inside `range`.
pub fn weekly_attendance(records: &[AttendanceRecord], range: &WeekRange) -> WeeklyAttendanceSummary {
    let records: Vec<AttendanceRecord> = records
        .iter()
        .filter(|record| is_date_in_week_range(record.date, range))
        .copied()
        .collect();

    let present_days = records.iter().filter(|record| record.present).count() as u32;
    let absent_days = records.len() as u32 - present_days;
    let total_days = present_days + absent_days;

    let summary = WeeklyAttendanceSummary {
        week_range: *range,
        total_days,
        present_days,
        absent_days,
        percentage: percentage(present_days, total_days),
        records,
    };
    tracing::debug!(
        week = %range.label(),
        total = summary.total_days,
        present = summary.present_days,
        percentage = summary.percentage,
        "weekly attendance"
    );
    summary
}

/// Attendance over the weekdays of `range` that are on or before the day of `now`.
///
/// A week fully in the past considers all five weekdays; a week that has not
/// started considers none and reports `0`.
pub fn truncated_attendance(records: &[AttendanceRecord], range: &WeekRange, now: NaiveDateTime) -> TruncatedAttendance {
    let today = now.date();
    let considered: Vec<NaiveDateTime> = days_in_week(range)
        .into_iter()
        .filter(|day| is_weekday(*day) && day.date() <= today)
        .collect();

    let present_days = considered
        .iter()
        .filter(|day| records.iter().find(|record| is_same_day(record.date, **day)).is_some_and(|record| record.present))
        .count() as u32;
    let considered_days = considered.len() as u32;

    let result = TruncatedAttendance {
        considered_days,
        present_days,
        percentage: percentage(present_days, considered_days),
    };
    tracing::debug!(
        week = %range.label(),
        considered = considered_days,
        present = present_days,
        percentage = result.percentage,
        "truncated attendance"
    );
    result
}

/// Truncated attendance for the week containing `now`.
///
/// Fails only when that week runs past the last date chrono can represent.
pub fn current_week_attendance(records: &[AttendanceRecord], now: NaiveDateTime) -> Result<TruncatedAttendance, CalendarError> {
    Ok(truncated_attendance(records, &week_range(0, now)?, now))
}

/// Classifies a single day, telling an explicit absence apart from missing data.
pub fn attendance_status(date: NaiveDateTime, records: &[AttendanceRecord]) -> AttendanceStatus {
    match records.iter().find(|record| is_same_day(record.date, date)) {
        Some(record) if record.present => AttendanceStatus::Present,
        Some(_) => AttendanceStatus::Absent,
        None => AttendanceStatus::NoRecord,
    }
}

/// Day-keyed view over a record slice.
///
/// Answers the same questions as the linear lookups above; the first record
/// on a given day wins, as with a forward scan.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    by_day: HashMap<NaiveDate, bool>,
}

impl RecordIndex {
    pub fn new(records: &[AttendanceRecord]) -> Self {
        let mut by_day = HashMap::with_capacity(records.len());
        for record in records {
            by_day.entry(record.date.date()).or_insert(record.present);
        }
        RecordIndex { by_day }
    }

    pub fn status(&self, date: NaiveDate) -> AttendanceStatus {
        match self.by_day.get(&date) {
            Some(true) => AttendanceStatus::Present,
            Some(false) => AttendanceStatus::Absent,
            None => AttendanceStatus::NoRecord,
        }
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

/// Attendance records of one tracked child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAttendanceDataset {
    pub child_id: String,
    pub child_name: String,
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
}

impl ChildAttendanceDataset {
    pub fn weekly(&self, range: &WeekRange) -> WeeklyAttendanceSummary {
        weekly_attendance(&self.attendance_records, range)
    }

    pub fn current_week(&self, now: NaiveDateTime) -> Result<TruncatedAttendance, CalendarError> {
        current_week_attendance(&self.attendance_records, now)
    }

    pub fn truncated(&self, range: &WeekRange, now: NaiveDateTime) -> TruncatedAttendance {
        truncated_attendance(&self.attendance_records, range, now)
    }

    pub fn status(&self, date: NaiveDate) -> AttendanceStatus {
        attendance_status(start_of_day(date), &self.attendance_records)
    }
}

/// Serde adapter accepting `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS` record dates.
mod record_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date_time) = raw.parse::<NaiveDateTime>() {
            return Ok(date_time);
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(|date| date.and_time(chrono::NaiveTime::MIN))
            .map_err(|_| de::Error::custom(format!("invalid attendance date '{}'", raw)))
    }
}
