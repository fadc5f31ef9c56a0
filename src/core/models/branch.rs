//! Branch model

use serde::{Deserialize, Serialize};

/// Specialization within a course (e.g., Computer Science & Engineering)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Unique identifier
    pub id: String,

    /// Parent course identifier
    pub course_id: String,

    /// Display name
    pub name: String,

    /// Short code used in roll numbers (e.g., "CSE")
    pub code: String,

    /// Seats per batch
    pub capacity: u32,
}

impl Branch {
    /// Create a new branch
    #[must_use]
    pub fn new(id: &str, course_id: &str, name: &str, code: &str, capacity: u32) -> Self {
        Self {
            id: id.to_string(),
            course_id: course_id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            capacity,
        }
    }
}
