use crate::{
    libs::{
        clock::SystemClock,
        config::Config,
        date_strip::DateStrip,
        formatter::{format_day, parse_date},
        messages::Message,
        selection::SelectionScope,
        view::View,
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StripArgs {
    #[arg(short, long, default_value = "today", help = "Day to highlight (today or YYYY-MM-DD)")]
    date: String,
}

pub fn cmd(args: StripArgs) -> Result<()> {
    let config = Config::read()?;
    let scope = SelectionScope::open(SystemClock);
    let today = scope.today();
    scope.change_date(parse_date(&args.date, today)?);

    let strip = DateStrip::with_window(today, config.strip_window());
    msg_print!(Message::StripHeader(format_day(today)), true);
    View::date_strip(&strip, scope.selected()).printstd();

    if strip.today_position().is_none() {
        msg_info!(Message::TodayIsWeekend(format_day(today)));
    }
    if strip.position(scope.selected()).is_none() {
        msg_warning!(Message::SelectedDateOutsideStrip(format_day(scope.selected())));
    }

    scope.close();
    Ok(())
}
