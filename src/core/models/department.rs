//! Department model

use serde::{Deserialize, Serialize};

/// Teaching department; teachers reference it by `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short code (e.g., "CSE")
    pub code: String,
}
