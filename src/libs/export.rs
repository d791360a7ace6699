//! Export of weekly attendance for external analysis.
//!
//! One row per child with the whole-week tally and the percentage over the
//! school days that have already happened.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use satchel::libs::calendar::week_range;
//! use satchel::libs::clock::{Clock, SystemClock};
//! use satchel::libs::export::{ExportFormat, Exporter};
//! use satchel::libs::roster::Roster;
//!
//! let roster = Roster::load("roster.json".as_ref())?;
//! let now = SystemClock.now();
//! Exporter::new(ExportFormat::Csv, None).export_week(&roster, &week_range(0, now)?, now)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::calendar::WeekRange;
use super::messages::Message;
use super::roster::Roster;
use crate::msg_success;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Supported export output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheet applications.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportWeekRow {
    pub child_id: String,
    pub child_name: String,
    /// Monday of the week, `YYYY-MM-DD`
    pub week_start: String,
    /// Sunday of the week, `YYYY-MM-DD`
    pub week_end: String,
    pub total_days: u32,
    pub present_days: u32,
    pub absent_days: u32,
    /// Whole-week percentage (0-100)
    pub percentage: u32,
    /// School days up to the export instant that were considered
    pub considered_days: u32,
    /// Percentage over the considered days (0-100)
    pub percentage_so_far: u32,
}

/// Writes weekly attendance exports to a file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `satchel_export_<timestamp>.<ext>`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "satchel_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Builds the rows for every child in the roster.
    pub fn rows(roster: &Roster, range: &WeekRange, now: NaiveDateTime) -> Vec<ExportWeekRow> {
        roster
            .children
            .iter()
            .map(|child| {
                let summary = child.weekly(range);
                let so_far = child.truncated(range, now);
                ExportWeekRow {
                    child_id: child.child_id.clone(),
                    child_name: child.child_name.clone(),
                    week_start: range.monday().format("%Y-%m-%d").to_string(),
                    week_end: range.sunday().format("%Y-%m-%d").to_string(),
                    total_days: summary.total_days,
                    present_days: summary.present_days,
                    absent_days: summary.absent_days,
                    percentage: summary.percentage,
                    considered_days: so_far.considered_days,
                    percentage_so_far: so_far.percentage,
                }
            })
            .collect()
    }

    /// Exports the week of `range` for the whole roster.
    pub fn export_week(&self, roster: &Roster, range: &WeekRange, now: NaiveDateTime) -> Result<()> {
        let rows = Self::rows(roster, range, now);
        tracing::debug!(rows = rows.len(), path = %self.output_path.display(), "exporting week");

        match self.format {
            ExportFormat::Csv => self.write_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_csv(&self, rows: &[ExportWeekRow]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
