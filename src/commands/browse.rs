//! Interactive browsing across children and school days.
//!
//! One [`SelectionScope`] lives for the whole session. Moving between children
//! never touches the selected day, so every child is shown on the same date.

use super::load_roster;
use crate::{
    libs::{
        calendar::{week_offset_of, week_range},
        carousel::ChildCarousel,
        clock::{Clock, SystemClock},
        date_strip::DateStrip,
        error::StateError,
        formatter::{format_day, format_status},
        messages::Message,
        selection::{SelectedDateHandle, SelectionScope},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::{Days, NaiveDateTime};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[arg(short, long, help = "Roster JSON file; defaults to the configured one")]
    roster: Option<PathBuf>,
}

/// One step a user can take while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    PreviousChild,
    NextChild,
    PreviousDay,
    NextDay,
    PreviousWeek,
    NextWeek,
    Today,
    Quit,
}

impl BrowseAction {
    pub const ALL: [BrowseAction; 8] = [
        BrowseAction::PreviousChild,
        BrowseAction::NextChild,
        BrowseAction::PreviousDay,
        BrowseAction::NextDay,
        BrowseAction::PreviousWeek,
        BrowseAction::NextWeek,
        BrowseAction::Today,
        BrowseAction::Quit,
    ];

    fn label(self) -> Message {
        match self {
            BrowseAction::PreviousChild => Message::BrowsePreviousChild,
            BrowseAction::NextChild => Message::BrowseNextChild,
            BrowseAction::PreviousDay => Message::BrowsePreviousDay,
            BrowseAction::NextDay => Message::BrowseNextDay,
            BrowseAction::PreviousWeek => Message::BrowsePreviousWeek,
            BrowseAction::NextWeek => Message::BrowseNextWeek,
            BrowseAction::Today => Message::BrowseToday,
            BrowseAction::Quit => Message::BrowseQuit,
        }
    }
}

/// Applies `action` to the carousel and the selected date.
///
/// Day moves follow the strip, so weekends are skipped. Week moves stop at
/// the ends of the representable calendar. Returns whether anything changed;
/// `Quit` never changes anything.
pub fn apply(
    action: BrowseAction,
    carousel: &mut ChildCarousel,
    selection: &SelectedDateHandle,
    strip: &DateStrip,
) -> Result<bool, StateError> {
    let selected = selection.selected()?;
    let moved = match action {
        BrowseAction::PreviousChild => carousel.previous(),
        BrowseAction::NextChild => carousel.next(),
        BrowseAction::PreviousDay => match strip.previous_entry(selected) {
            Some(entry) => {
                selection.change_date(entry.date.date())?;
                true
            }
            None => false,
        },
        BrowseAction::NextDay => match strip.next_entry(selected) {
            Some(entry) => {
                selection.change_date(entry.date.date())?;
                true
            }
            None => false,
        },
        BrowseAction::PreviousWeek => match selected.checked_sub_days(Days::new(7)) {
            Some(date) => {
                selection.change_date(date)?;
                true
            }
            None => false,
        },
        BrowseAction::NextWeek => match selected.checked_add_days(Days::new(7)) {
            Some(date) => {
                selection.change_date(date)?;
                true
            }
            None => false,
        },
        BrowseAction::Today => {
            selection.reset_to_today()?;
            selection.selected()? != selected
        }
        BrowseAction::Quit => false,
    };
    tracing::debug!(?action, moved, child = carousel.index(), "browse step");
    Ok(moved)
}

pub fn cmd(args: BrowseArgs) -> Result<()> {
    let (config, roster) = load_roster(args.roster)?;
    let mut carousel = ChildCarousel::new(roster.children)?;
    let scope = SelectionScope::open(SystemClock);
    let handle = scope.handle();
    let strip = DateStrip::with_window(scope.today(), config.strip_window());
    let labels: Vec<String> = BrowseAction::ALL.iter().map(|action| action.label().to_string()).collect();

    msg_print!(Message::BrowseHeader, true);

    loop {
        show(&carousel, &handle, SystemClock.now())?;

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::BrowseActionPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;
        let action = BrowseAction::ALL[choice];

        if action == BrowseAction::Quit {
            break;
        }
        if !apply(action, &mut carousel, &handle, &strip)? {
            msg_info!(Message::BrowseNoMove);
        }
    }

    scope.close();
    msg_print!(Message::BrowseGoodbye);
    Ok(())
}

fn show(carousel: &ChildCarousel, handle: &SelectedDateHandle, now: NaiveDateTime) -> Result<()> {
    let child = carousel.current();
    let selected = handle.selected()?;
    let range = week_range(week_offset_of(selected, now)?, now)?;

    msg_print!(Message::BrowseChild(child.child_name.clone(), carousel.index() + 1, carousel.len()), true);
    msg_print!(Message::BrowseSelectedDate(format!(
        "{} {}",
        format_day(selected),
        format_status(child.status(selected))
    )));
    msg_print!(Message::WeekHeader(child.child_name.clone(), range.label()));
    View::weekly_summary(child, &child.weekly(&range)).printstd();

    if range.week_offset == 0 {
        let so_far = child.truncated(&range, now);
        msg_print!(Message::WeekSoFar(so_far.percentage, so_far.considered_days));
    }
    Ok(())
}
