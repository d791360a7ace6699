//! Weekday-only date strip for the scrollable day selector.
//!
//! The strip covers a fixed window around today (14 days back, 7 days forward
//! by default) and drops Saturdays and Sundays. The default window spans 22
//! calendar days, which leaves 15 or 16 weekday entries, oldest first.

use super::calendar::{is_same_day, is_weekend, start_of_day};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Number of days the strip reaches into the past and future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripWindow {
    /// Calendar days before today included in the strip.
    pub past_days: u32,
    /// Calendar days after today included in the strip.
    pub future_days: u32,
}

impl StripWindow {
    /// Upper bound for either side of the window.
    pub const MAX_DAYS: u32 = 366;

    /// The window with each side capped at [`StripWindow::MAX_DAYS`].
    pub fn clamped(self) -> Self {
        StripWindow {
            past_days: self.past_days.min(Self::MAX_DAYS),
            future_days: self.future_days.min(Self::MAX_DAYS),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        self.past_days <= Self::MAX_DAYS && self.future_days <= Self::MAX_DAYS
    }
}

impl Default for StripWindow {
    /// Two school weeks back and one forward.
    fn default() -> Self {
        StripWindow {
            past_days: 14,
            future_days: 7,
        }
    }
}

/// One selectable weekday in the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDayEntry {
    /// Start of the day.
    pub date: NaiveDateTime,
    /// Day of month, two digits, zero padded (`"07"`).
    pub day_number: String,
    /// Uppercase three-letter weekday (`"MON"`).
    pub day_name: String,
    pub is_today: bool,
}

impl CalendarDayEntry {
    fn new(date: NaiveDate, is_today: bool) -> Self {
        CalendarDayEntry {
            date: start_of_day(date),
            day_number: date.format("%d").to_string(),
            day_name: date.format("%a").to_string().to_uppercase(),
            is_today,
        }
    }
}

/// Generated strip of weekday entries around a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStrip {
    entries: Vec<CalendarDayEntry>,
}

impl DateStrip {
    /// Builds the strip with the default 14 back / 7 forward window.
    pub fn generate(today: NaiveDate) -> Self {
        Self::with_window(today, StripWindow::default())
    }

    /// Builds the strip for `window`, capped at [`StripWindow::MAX_DAYS`] per side.
    ///
    /// Days beyond the representable calendar are left out.
    pub fn with_window(today: NaiveDate, window: StripWindow) -> Self {
        let window = window.clamped();
        let past = -i64::from(window.past_days);
        let future = i64::from(window.future_days);

        let entries: Vec<CalendarDayEntry> = (past..=future)
            .filter_map(|i| {
                let date = today.checked_add_signed(Duration::days(i))?;
                (!is_weekend(start_of_day(date))).then(|| CalendarDayEntry::new(date, i == 0))
            })
            .collect();

        tracing::debug!(%today, entries = entries.len(), "generated date strip");
        DateStrip { entries }
    }

    pub fn entries(&self) -> &[CalendarDayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the entry falling on the same day as `selected`.
    ///
    /// Weekends and days outside the window yield `None`; callers treat that
    /// as "nothing to scroll to".
    pub fn position(&self, selected: NaiveDate) -> Option<usize> {
        let selected = start_of_day(selected);
        self.entries.iter().position(|entry| is_same_day(entry.date, selected))
    }

    /// Whether the entry at `index` is the selected day.
    pub fn is_selected(&self, index: usize, selected: NaiveDate) -> bool {
        self.entries.get(index).is_some_and(|entry| entry.date.date() == selected)
    }

    /// Latest entry strictly before `date`.
    pub fn previous_entry(&self, date: NaiveDate) -> Option<&CalendarDayEntry> {
        self.entries.iter().rev().find(|entry| entry.date.date() < date)
    }

    /// Earliest entry strictly after `date`.
    pub fn next_entry(&self, date: NaiveDate) -> Option<&CalendarDayEntry> {
        self.entries.iter().find(|entry| entry.date.date() > date)
    }

    /// Index of today's entry, absent when today is a weekend.
    pub fn today_position(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_today)
    }
}

impl<'a> IntoIterator for &'a DateStrip {
    type Item = &'a CalendarDayEntry;
    type IntoIter = std::slice::Iter<'a, CalendarDayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::calendar::is_weekday;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn friday_strip_has_no_weekends_and_one_today() {
        // Friday 17 January 2025: window 3 Jan ..= 24 Jan
        let strip = DateStrip::generate(date(2025, 1, 17));
        assert_eq!(strip.len(), 16);
        assert!(strip.entries().iter().all(|e| is_weekday(e.date)));
        assert_eq!(strip.entries().iter().filter(|e| e.is_today).count(), 1);
        assert_eq!(strip.entries()[0].date.date(), date(2025, 1, 3));
        assert_eq!(strip.entries().last().unwrap().date.date(), date(2025, 1, 24));
    }

    #[test]
    fn default_window_holds_fifteen_or_sixteen_entries_on_any_day() {
        // Monday 13 through Sunday 19 January 2025
        for day in 13..=19 {
            let today = date(2025, 1, day);
            let strip = DateStrip::generate(today);
            assert!((15..=16).contains(&strip.len()), "{} has {} entries", today, strip.len());
            let todays = strip.entries().iter().filter(|e| e.is_today).count();
            let expected = if today.weekday().number_from_monday() <= 5 { 1 } else { 0 };
            assert_eq!(todays, expected, "{}", today);
        }
    }

    #[test]
    fn oversized_window_is_capped() {
        let huge = StripWindow {
            past_days: 200_000_000,
            future_days: u32::MAX,
        };
        assert!(!huge.is_within_bounds());
        assert!(huge.clamped().is_within_bounds());

        let strip = DateStrip::with_window(date(2025, 1, 15), huge);
        let capped = DateStrip::with_window(date(2025, 1, 15), huge.clamped());
        assert_eq!(strip, capped);
        assert!(strip.len() <= 2 * StripWindow::MAX_DAYS as usize + 1);
        assert_eq!(strip.entries()[0].date.date(), date(2025, 1, 15) - Duration::days(i64::from(StripWindow::MAX_DAYS)));
    }

    #[test]
    fn window_at_the_calendar_edge_drops_unrepresentable_days() {
        let strip = DateStrip::generate(NaiveDate::MAX);
        assert!(strip.entries().iter().all(|e| e.date.date() <= NaiveDate::MAX));
        let strip = DateStrip::generate(NaiveDate::MIN);
        assert!(strip.entries().iter().all(|e| e.date.date() >= NaiveDate::MIN));
        assert!(!strip.is_empty());
    }

    #[test]
    fn entries_are_strictly_increasing() {
        let strip = DateStrip::generate(date(2025, 6, 4));
        for pair in strip.entries().windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn entries_are_formatted_for_display() {
        let strip = DateStrip::generate(date(2025, 1, 6));
        let today = &strip.entries()[strip.today_position().unwrap()];
        assert_eq!(today.day_number, "06");
        assert_eq!(today.day_name, "MON");
        assert_eq!(today.date.weekday(), Weekday::Mon);
    }

    #[test]
    fn weekend_today_has_no_today_entry() {
        let strip = DateStrip::generate(date(2025, 1, 18));
        assert_eq!(strip.today_position(), None);
        assert!(strip.entries().iter().all(|e| !e.is_today));
    }

    #[test]
    fn position_finds_selected_weekday() {
        let strip = DateStrip::generate(date(2025, 1, 17));
        let index = strip.position(date(2025, 1, 15)).unwrap();
        assert_eq!(strip.entries()[index].day_name, "WED");
        assert!(strip.is_selected(index, date(2025, 1, 15)));
        assert_eq!(strip.position(date(2025, 1, 17)), strip.today_position());
    }

    #[test]
    fn position_misses_weekends_and_out_of_window_days() {
        let strip = DateStrip::generate(date(2025, 1, 17));
        assert_eq!(strip.position(date(2025, 1, 18)), None);
        assert_eq!(strip.position(date(2025, 1, 2)), None);
        assert_eq!(strip.position(date(2025, 1, 27)), None);
        assert!(!strip.is_selected(999, date(2025, 1, 17)));
    }

    #[test]
    fn neighbours_skip_weekends_and_stop_at_the_edges() {
        let strip = DateStrip::generate(date(2025, 1, 17));
        assert_eq!(strip.next_entry(date(2025, 1, 17)).unwrap().date.date(), date(2025, 1, 20));
        assert_eq!(strip.previous_entry(date(2025, 1, 20)).unwrap().date.date(), date(2025, 1, 17));
        // from a weekend outside the entries
        assert_eq!(strip.previous_entry(date(2025, 1, 19)).unwrap().day_name, "FRI");
        assert!(strip.previous_entry(date(2025, 1, 3)).is_none());
        assert!(strip.next_entry(date(2025, 1, 24)).is_none());
    }

    #[test]
    fn zero_window_holds_only_today() {
        let window = StripWindow { past_days: 0, future_days: 0 };
        assert_eq!(DateStrip::with_window(date(2025, 1, 15), window).len(), 1);
        assert!(DateStrip::with_window(date(2025, 1, 19), window).is_empty());
    }
}
