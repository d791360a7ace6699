//! Weekly attendance export command.
//!
//! ```bash
//! # Export the current week as CSV
//! satchel export
//!
//! # Export last week as JSON with a custom file name
//! satchel export --offset -1 --format json --output last_week.json
//! ```

use super::load_roster;
use crate::{
    libs::{
        calendar::week_range,
        clock::{Clock, SystemClock},
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Weeks from the current week (-1 = last week)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i32,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; defaults to a timestamped name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Roster JSON file; defaults to the configured one
    #[arg(short, long)]
    roster: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let (_, roster) = load_roster(args.roster)?;
    if roster.is_empty() {
        msg_bail_anyhow!(Message::RosterEmpty);
    }
    let now = SystemClock.now();
    let range = week_range(args.offset, now)?;

    msg_info!(Message::ExportingData(range.label(), format!("{:?}", args.format)));

    Exporter::new(args.format, args.output).export_week(&roster, &range, now)
}
