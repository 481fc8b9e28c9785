//! The event record and its derived status.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status::status_at;

/// One planner event as persisted in the store.
///
/// `date` and `time` stay raw strings: rows already in the store may be
/// malformed (hand-edited file) and must still be listed, deriving
/// [`EventStatus::Unknown`]. New events are validated before they are
/// appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: String,
    pub time: String,
    pub name: String,
}

impl Event {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Event {
            date: date.into(),
            time: time.into(),
            name: name.into(),
        }
    }

    /// Derive the live status of this event relative to `now`.
    pub fn status(&self, now: NaiveDateTime) -> EventStatus {
        status_at(&self.date, &self.time, now)
    }
}

/// Status of an event relative to some instant.
///
/// Always derived at display time. The store carries a status column for
/// readers of the raw file, but no code path trusts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Overdue,
    Unknown,
}

impl EventStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "📍",
            EventStatus::Overdue => "⌛",
            EventStatus::Unknown => "?",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "UPCOMING",
            EventStatus::Overdue => "OVERDUE",
            EventStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // An unparseable row gets a bare marker, not a label
            EventStatus::Unknown => write!(f, "{}", self.symbol()),
            _ => write!(f, "{} {}", self.symbol(), self.label()),
        }
    }
}
