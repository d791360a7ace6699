//! Loading the children's attendance datasets from a JSON file.
//!
//! The file stands in for the persistence layer that normally supplies
//! records:
//!
//! ```json
//! {
//!   "children": [
//!     {
//!       "child_id": "c-1",
//!       "child_name": "Ada",
//!       "attendance_records": [
//!         { "date": "2025-01-13", "present": true },
//!         { "date": "2025-01-14T08:40:00", "present": false }
//!       ]
//!     }
//!   ]
//! }
//! ```

use super::attendance::ChildAttendanceDataset;
use super::config::Config;
use super::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub children: Vec<ChildAttendanceDataset>,
}

impl Roster {
    pub fn new(children: Vec<ChildAttendanceDataset>) -> Self {
        Roster { children }
    }

    /// Reads and parses a roster file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| msg_error_anyhow!(Message::RosterReadFailed(path.display().to_string())))?;
        let roster: Roster = serde_json::from_str(&raw)
            .with_context(|| msg_error_anyhow!(Message::RosterParseFailed(path.display().to_string())))?;
        msg_debug!(Message::RosterLoaded(roster.children.len(), path.display().to_string()));
        Ok(roster)
    }

    /// Picks the roster file: the explicit argument first, then the configured path.
    pub fn resolve_path(explicit: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
        explicit
            .or_else(|| config.roster.clone())
            .ok_or_else(|| msg_error_anyhow!(Message::RosterPathMissing))
    }

    pub fn find(&self, child_id: &str) -> Option<&ChildAttendanceDataset> {
        self.children.iter().find(|child| child.child_id == child_id)
    }

    /// The one child named by `child_id`, or every child when no id is given.
    pub fn select(&self, child_id: Option<&str>) -> Result<Vec<&ChildAttendanceDataset>> {
        match child_id {
            Some(id) => self
                .find(id)
                .map(|child| vec![child])
                .ok_or_else(|| msg_error_anyhow!(Message::ChildNotFound(id.to_string()))),
            None => Ok(self.children.iter().collect()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}
