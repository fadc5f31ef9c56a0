//! Teacher (faculty) model

use super::Status;
use serde::{Deserialize, Serialize};

/// A faculty member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique identifier
    pub id: String,

    /// Staff number (e.g., "EMP1001")
    pub employee_id: String,

    /// Full name
    pub name: String,

    /// Owning department identifier
    pub department_id: String,

    /// Title (e.g., "Professor", "Assistant Professor")
    pub designation: String,

    /// Subjects taught
    #[serde(default)]
    pub subjects: Vec<String>,

    /// Employment status
    pub status: Status,

    /// Contact email
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,
}

impl Teacher {
    /// Whether the teacher is currently on staff
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Whether this teacher teaches `subject` (case-insensitive)
    #[must_use]
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s.eq_ignore_ascii_case(subject))
    }
}
