use super::load_roster;
use crate::{
    libs::{
        clock::{Clock, SystemClock},
        formatter::{format_day, parse_date},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(short, long, default_value = "today", help = "Day to inspect (today or YYYY-MM-DD)")]
    date: String,
    #[arg(short, long, help = "Child id; all children when omitted")]
    child: Option<String>,
    #[arg(short, long, help = "Roster JSON file; defaults to the configured one")]
    roster: Option<PathBuf>,
}

pub fn cmd(args: StatusArgs) -> Result<()> {
    let (_, roster) = load_roster(args.roster)?;
    let date = parse_date(&args.date, SystemClock.today())?;
    let children = roster.select(args.child.as_deref())?;

    if children.is_empty() {
        msg_info!(Message::RosterEmpty);
        return Ok(());
    }

    msg_print!(Message::StatusHeader(format_day(date)), true);
    View::status(&children, date).printstd();
    Ok(())
}
