//! Fee record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state of a fee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    /// Fully paid
    Paid,
    /// Partly paid
    Partial,
    /// Nothing paid, not yet due
    Pending,
    /// Past due with a balance
    Overdue,
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Paid => "paid",
            Self::Partial => "partial",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        };
        f.write_str(label)
    }
}

/// Semester fee owed by a student, in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    /// Unique identifier
    pub id: String,
    /// Student billed
    pub student_id: String,
    /// Semester billed for
    pub semester: u8,
    /// Amount billed
    pub amount: u32,
    /// Amount received so far
    pub paid: u32,
    /// Payment deadline
    pub due_date: NaiveDate,
    /// Payment state
    pub status: FeeStatus,
}

impl FeeRecord {
    /// Amount still owed
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.amount.saturating_sub(self.paid)
    }
}
