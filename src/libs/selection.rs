//! Scoped "currently viewed date" state.
//!
//! A [`SelectionScope`] is created when a screen or session starts and owns
//! the selected date. Readers receive [`SelectedDateHandle`]s; once the scope
//! is closed or dropped every handle fails with [`StateError::NoProvider`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use satchel::libs::clock::FixedClock;
//! use satchel::libs::selection::SelectionScope;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let scope = SelectionScope::open(FixedClock::at_noon(today));
//! let handle = scope.handle();
//!
//! handle.change_date(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()).unwrap();
//! assert_eq!(scope.selected(), NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
//!
//! scope.close();
//! assert!(handle.selected().is_err());
//! ```

use super::clock::Clock;
use super::error::StateError;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, Copy)]
struct SelectedDate {
    date: NaiveDate,
    revision: u64,
}

struct SelectionCell {
    state: RwLock<SelectedDate>,
    clock: Box<dyn Clock>,
}

impl SelectionCell {
    fn selected(&self) -> NaiveDate {
        self.state.read().date
    }

    fn revision(&self) -> u64 {
        self.state.read().revision
    }

    fn set(&self, date: NaiveDate) {
        let mut state = self.state.write();
        let previous = state.date;
        state.date = date;
        state.revision += 1;
        tracing::debug!(%previous, selected = %date, revision = state.revision, "selected date changed");
    }
}

/// Owner of the selected date for one screen or session.
pub struct SelectionScope {
    cell: Arc<SelectionCell>,
}

impl SelectionScope {
    /// Opens a scope whose selected date starts at the clock's today.
    pub fn open(clock: impl Clock + 'static) -> Self {
        let today = clock.today();
        tracing::debug!(%today, "selection scope opened");
        SelectionScope {
            cell: Arc::new(SelectionCell {
                state: RwLock::new(SelectedDate { date: today, revision: 0 }),
                clock: Box::new(clock),
            }),
        }
    }

    /// A handle for readers; it stays valid while this scope is alive.
    pub fn handle(&self) -> SelectedDateHandle {
        SelectedDateHandle {
            cell: Arc::downgrade(&self.cell),
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.cell.selected()
    }

    /// Number of mutations since the scope was opened.
    pub fn revision(&self) -> u64 {
        self.cell.revision()
    }

    /// Replaces the selected date; any date is accepted.
    pub fn change_date(&self, date: NaiveDate) {
        self.cell.set(date);
    }

    pub fn reset_to_today(&self) {
        self.cell.set(self.cell.clock.today());
    }

    /// The clock's current day.
    pub fn today(&self) -> NaiveDate {
        self.cell.clock.today()
    }

    /// Tears the scope down, invalidating every handle.
    pub fn close(self) {
        tracing::debug!(selected = %self.selected(), "selection scope closed");
    }
}

/// Non-owning access to a [`SelectionScope`].
///
/// The default handle is attached to no scope and fails every operation.
#[derive(Clone, Default)]
pub struct SelectedDateHandle {
    cell: Weak<SelectionCell>,
}

impl SelectedDateHandle {
    fn cell(&self) -> Result<Arc<SelectionCell>, StateError> {
        self.cell.upgrade().ok_or(StateError::NoProvider)
    }

    pub fn selected(&self) -> Result<NaiveDate, StateError> {
        Ok(self.cell()?.selected())
    }

    pub fn revision(&self) -> Result<u64, StateError> {
        Ok(self.cell()?.revision())
    }

    pub fn change_date(&self, date: NaiveDate) -> Result<(), StateError> {
        self.cell()?.set(date);
        Ok(())
    }

    pub fn reset_to_today(&self) -> Result<(), StateError> {
        let cell = self.cell()?;
        cell.set(cell.clock.today());
        Ok(())
    }

    /// Whether the owning scope is still open.
    pub fn is_attached(&self) -> bool {
        self.cell.strong_count() > 0
    }
}
