//! Display implementation for satchel application messages.
//!
//! This module is the single place where [`Message`] variants become text.
//! Keeping the wording here means commands, views and errors all speak with
//! one voice, and parameters are interpolated with their types checked at
//! compile time.
//!
//! ## Usage Integration
//!
//! ```rust
//! use satchel::libs::messages::Message;
//!
//! assert_eq!(Message::ChildNotFound("c-7".into()).to_string(), "No child with id 'c-7' in the roster");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleRoster => "Roster file".to_string(),
            Message::ConfigModuleStrip => "Date strip window".to_string(),
            Message::StripWindowCapped(max) => format!("Date strip window is limited to {} days on each side", max),

            // === ROSTER MESSAGES ===
            Message::RosterPathMissing => {
                "No roster file given. Pass --roster <FILE> or run 'satchel init' to configure one".to_string()
            }
            Message::RosterLoaded(count, path) => format!("Loaded {} children from {}", count, path),
            Message::RosterReadFailed(path) => format!("Failed to read roster file: {}", path),
            Message::RosterParseFailed(path) => format!("Failed to parse roster file: {}", path),
            Message::RosterEmpty => "The roster does not contain any children".to_string(),
            Message::ChildNotFound(id) => format!("No child with id '{}' in the roster", id),

            // === DATE STRIP MESSAGES ===
            Message::StripHeader(today) => format!("📅 School days around {}", today),
            Message::SelectedDateOutsideStrip(date) => {
                format!("{} is not a school day inside the strip; nothing to highlight", date)
            }
            Message::TodayIsWeekend(today) => format!("{} is a weekend day; the strip has no entry for today", today),

            // === ATTENDANCE MESSAGES ===
            Message::WeekHeader(name, week) => format!("📋 Attendance for {} ({})", name, week),
            Message::WeekSoFar(percentage, days) => {
                format!("So far this week: {}% over {} school day(s)", percentage, days)
            }
            Message::NoRecordsForWeek => "No attendance records for this week".to_string(),
            Message::StatusHeader(date) => format!("Attendance on {}", date),
            Message::ChildrenHeader(week) => format!("👧 Children this week ({})", week),

            // === BROWSE MESSAGES ===
            Message::BrowseHeader => "🎒 Browsing attendance. Choose an action to move around".to_string(),
            Message::BrowseChild(name, position, total) => format!("Child {}/{}: {}", position, total, name),
            Message::BrowseSelectedDate(date) => format!("Selected day: {}", date),
            Message::BrowseActionPrompt => "What next?".to_string(),
            Message::BrowsePreviousChild => "◀ Previous child".to_string(),
            Message::BrowseNextChild => "Next child ▶".to_string(),
            Message::BrowsePreviousDay => "◀ Previous school day".to_string(),
            Message::BrowseNextDay => "Next school day ▶".to_string(),
            Message::BrowsePreviousWeek => "◀◀ Previous week".to_string(),
            Message::BrowseNextWeek => "Next week ▶▶".to_string(),
            Message::BrowseToday => "Back to today".to_string(),
            Message::BrowseQuit => "Quit".to_string(),
            Message::BrowseNoMove => "Already at the edge; nothing to move to".to_string(),
            Message::BrowseGoodbye => "Bye!".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(week, format) => format!("Exporting attendance for {} as {}", week, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === INPUT MESSAGES ===
            Message::InvalidDate(raw) => format!("Invalid date '{}'. Use 'today' or YYYY-MM-DD", raw),
        };
        write!(f, "{}", s)
    }
}
