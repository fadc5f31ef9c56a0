//! Course model

use serde::{Deserialize, Serialize};

/// Grouping of branches under a degree (e.g., "Engineering" under B.Tech)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier
    pub id: String,

    /// Parent degree identifier
    pub degree_id: String,

    /// Display name
    pub name: String,

    /// Short code (e.g., "ENG")
    pub code: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Course identifier
    /// * `degree_id` - Owning degree
    /// * `name` - Display name
    /// * `code` - Short code
    #[must_use]
    pub fn new(id: &str, degree_id: &str, name: &str, code: &str) -> Self {
        Self {
            id: id.to_string(),
            degree_id: degree_id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}
