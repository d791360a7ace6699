//! Precondition failures of the stateful containers and the calendar math.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// The selected date was read or changed without a live selection scope.
    #[error("selected date used without provider: open a selection scope first")]
    NoProvider,
    /// A carousel needs at least one dataset to point at.
    #[error("carousel requires at least one child dataset")]
    EmptyCarousel,
}

/// Dates that fall outside the range chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("week offset {0} is outside the supported calendar")]
    WeekOutOfRange(i32),
    #[error("the week of {0} is outside the supported calendar")]
    DateOutOfRange(NaiveDate),
}
