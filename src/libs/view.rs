use super::attendance::{ChildAttendanceDataset, TruncatedAttendance, WeeklyAttendanceSummary};
use super::calendar::WeekRange;
use super::date_strip::DateStrip;
use super::formatter::{format_day, format_percentage, format_status};
use chrono::{NaiveDate, NaiveDateTime};
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Strip as a single row; `*` marks today, brackets mark the selection.
    pub fn date_strip(strip: &DateStrip, selected: NaiveDate) -> Table {
        let mut names = Vec::with_capacity(strip.len());
        let mut numbers = Vec::with_capacity(strip.len());
        for (index, entry) in strip.entries().iter().enumerate() {
            let number = if entry.is_today {
                format!("{}*", entry.day_number)
            } else {
                entry.day_number.clone()
            };
            if strip.is_selected(index, selected) {
                names.push(format!("[{}]", entry.day_name));
                numbers.push(format!("[{}]", number));
            } else {
                names.push(entry.day_name.clone());
                numbers.push(number);
            }
        }

        let mut table = Table::new();
        table.add_row(Row::new(names.iter().map(|name| Cell::new(name)).collect()));
        table.add_row(Row::new(numbers.iter().map(|number| Cell::new(number)).collect()));
        table
    }

    /// Whole-week tally plus the day-by-day status of the five weekdays.
    pub fn weekly_summary(child: &ChildAttendanceDataset, summary: &WeeklyAttendanceSummary) -> Table {
        let mut table = Table::new();
        table.add_row(row!["DAY", "STATUS"]);
        for day in summary.week_range.weekdays() {
            table.add_row(row![format_day(day.date()), format_status(child.status(day.date()))]);
        }
        table.add_row(row!["PRESENT", summary.present_days]);
        table.add_row(row!["ABSENT", summary.absent_days]);
        table.add_row(row!["TOTAL", summary.total_days]);
        table.add_row(row!["ATTENDANCE", format_percentage(summary.percentage)]);
        table
    }

    /// Percentage over the school days that have already happened.
    pub fn truncated(so_far: &TruncatedAttendance) -> Table {
        let mut table = Table::new();
        table.add_row(row!["DAYS SO FAR", "PRESENT", "ATTENDANCE"]);
        table.add_row(row![
            so_far.considered_days,
            so_far.present_days,
            format_percentage(so_far.percentage)
        ]);
        table
    }

    /// One row per child: whole-week tally and the percentage so far.
    pub fn children(children: &[&ChildAttendanceDataset], range: &WeekRange, now: NaiveDateTime) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "PRESENT", "ABSENT", "WEEK", "SO FAR"]);
        for child in children {
            let summary = child.weekly(range);
            let so_far = child.truncated(range, now);
            table.add_row(row![
                child.child_id,
                child.child_name,
                summary.present_days,
                summary.absent_days,
                format_percentage(summary.percentage),
                format!("{} of {} days", format_percentage(so_far.percentage), so_far.considered_days)
            ]);
        }
        table
    }

    /// Status of every listed child on one day.
    pub fn status(children: &[&ChildAttendanceDataset], date: NaiveDate) -> Table {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "STATUS"]);
        for child in children {
            table.add_row(row![child.child_id, child.child_name, format_status(child.status(date))]);
        }
        table
    }
}
