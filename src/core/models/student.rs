//! Student model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enrollment / employment status shared by students and teachers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Currently enrolled or employed
    Active,
    /// Suspended, graduated, or on long leave
    Inactive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: String,

    /// Display identifier (e.g., "21CSE007")
    pub roll_no: String,

    /// Full name
    pub name: String,

    /// Degree the student is enrolled in
    pub degree_id: String,

    /// Branch the student is enrolled in
    pub branch_id: String,

    /// Current semester (1-based)
    pub semester: u8,

    /// Admission year; matches `Batch::year`
    pub batch: u16,

    /// Enrollment status
    pub status: Status,

    /// Contact email
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,
}

impl Student {
    /// Whether the student is currently enrolled
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}
