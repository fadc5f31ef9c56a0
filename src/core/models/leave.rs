//! Leave request model

use super::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason category of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveKind {
    /// Illness
    Sick,
    /// Short casual leave
    Casual,
    /// Personal matters
    Personal,
    /// Conferences, competitions, field work
    Academic,
}

impl fmt::Display for LeaveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sick => "sick",
            Self::Casual => "casual",
            Self::Personal => "personal",
            Self::Academic => "academic",
        };
        f.write_str(label)
    }
}

/// Review state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting review
    Pending,
    /// Granted
    Approved,
    /// Refused
    Rejected,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// A leave application by a student or a teacher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier
    pub id: String,
    /// Student or teacher id of the applicant
    pub applicant_id: String,
    /// Which table `applicant_id` refers to
    pub applicant_role: Role,
    /// Reason category
    pub kind: LeaveKind,
    /// First day away (inclusive)
    pub from: NaiveDate,
    /// Last day away (inclusive)
    pub to: NaiveDate,
    /// Free-text reason
    pub reason: String,
    /// Review state
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Number of calendar days covered, inclusive
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}
