//! Formatting and parsing helpers for console output and CLI input.
//!
//! ## Examples
//!
//! ```rust
//! use satchel::libs::attendance::AttendanceStatus;
//! use satchel::libs::formatter::{format_percentage, format_status};
//!
//! assert_eq!(format_percentage(67), "67%");
//! assert_eq!(format_status(AttendanceStatus::NoRecord), "-");
//! ```

use super::attendance::AttendanceStatus;
use super::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;

/// Display format for calendar days across views.
pub const DAY_FORMAT: &str = "%a %d %b %Y";

pub fn format_percentage(percentage: u32) -> String {
    format!("{}%", percentage)
}

/// Short marker for a day's status.
pub fn format_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "✔ present",
        AttendanceStatus::Absent => "✘ absent",
        AttendanceStatus::NoRecord => "-",
    }
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parses `today` (relative to `today`) or an ISO `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(raw.to_string())))
}
