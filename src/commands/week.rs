use super::load_roster;
use crate::{
    libs::{
        calendar::week_range,
        clock::{Clock, SystemClock},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct WeekArgs {
    #[arg(short, long, help = "Child id; all children when omitted")]
    child: Option<String>,
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true, help = "Weeks from the current week (-1 = last week)")]
    offset: i32,
    #[arg(short, long, help = "Roster JSON file; defaults to the configured one")]
    roster: Option<PathBuf>,
}

pub fn cmd(args: WeekArgs) -> Result<()> {
    let (_, roster) = load_roster(args.roster)?;
    let now = SystemClock.now();
    let range = week_range(args.offset, now)?;
    let children = roster.select(args.child.as_deref())?;

    if children.is_empty() {
        msg_info!(Message::RosterEmpty);
        return Ok(());
    }

    if args.child.is_none() {
        msg_print!(Message::ChildrenHeader(range.label()), true);
        View::children(&children, &range, now).printstd();
        return Ok(());
    }

    for child in children {
        let summary = child.weekly(&range);
        msg_print!(Message::WeekHeader(child.child_name.clone(), range.label()), true);
        if summary.total_days == 0 {
            msg_info!(Message::NoRecordsForWeek);
        }
        View::weekly_summary(child, &summary).printstd();

        if range.week_offset == 0 {
            let so_far = child.truncated(&range, now);
            msg_print!(Message::WeekSoFar(so_far.percentage, so_far.considered_days), true);
            View::truncated(&so_far).printstd();
        }
    }

    Ok(())
}
