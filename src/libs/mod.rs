//! Core library modules for the satchel application.
//!
//! ## Features
//!
//! - **Calendar Engine**: Monday-anchored week math, weekday predicates, date strip
//! - **Attendance Aggregation**: Whole-week tallies and today-truncated percentages
//! - **Navigation State**: Scoped selected date and the per-child carousel
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **User Interface**: Console tables, formatting, export
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use satchel::libs::attendance::{current_week_attendance, AttendanceRecord};
//!
//! let wednesday = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let records = vec![
//!     AttendanceRecord::on(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(), true),
//!     AttendanceRecord::on(NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(), false),
//!     AttendanceRecord::on(wednesday, true),
//! ];
//! let so_far = current_week_attendance(&records, wednesday.and_hms_opt(10, 0, 0).unwrap())?;
//! assert_eq!(so_far.percentage, 67);
//! # Ok::<(), satchel::libs::error::CalendarError>(())
//! ```

pub mod attendance;
pub mod calendar;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod date_strip;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod roster;
pub mod selection;
pub mod view;
