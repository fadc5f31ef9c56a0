//! Campus event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Exams, orientation, convocation
    Academic,
    /// Fests and performances
    Cultural,
    /// Tournaments and meets
    Sports,
    /// Hands-on sessions
    Workshop,
    /// Talks and guest lectures
    Seminar,
    /// Institution holiday
    Holiday,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Academic => "academic",
            Self::Cultural => "cultural",
            Self::Sports => "sports",
            Self::Workshop => "workshop",
            Self::Seminar => "seminar",
            Self::Holiday => "holiday",
        };
        f.write_str(label)
    }
}

/// Lifecycle of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Not started yet
    Upcoming,
    /// In progress
    Ongoing,
    /// Finished
    Completed,
    /// Called off
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A scheduled campus event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Category
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// First day (inclusive)
    pub start_date: NaiveDate,
    /// Last day (inclusive)
    pub end_date: NaiveDate,
    /// Location
    pub venue: String,
    /// Lifecycle status
    pub status: EventStatus,
}

impl Event {
    /// Whether the event's span intersects `[from, to]`; open bounds are unbounded
    #[must_use]
    pub fn overlaps(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.is_none_or(|from| self.end_date >= from) && to.is_none_or(|to| self.start_date <= to)
    }
}
