//! Extracurricular activity model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Interest club
    Club,
    /// Sports team
    Sport,
    /// Music, dance, drama
    Cultural,
    /// Coding, robotics
    Technical,
    /// Outreach and volunteering
    Social,
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Club => "club",
            Self::Sport => "sport",
            Self::Cultural => "cultural",
            Self::Technical => "technical",
            Self::Social => "social",
        };
        f.write_str(label)
    }
}

/// An extracurricular activity with its student members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: String,
    /// Name
    pub name: String,
    /// Category
    pub category: ActivityCategory,
    /// Faculty coordinator
    pub coordinator_id: String,
    /// Student ids enrolled
    #[serde(default)]
    pub members: Vec<String>,
    /// Accepting new members
    pub open: bool,
}

impl Activity {
    /// Whether `student_id` is enrolled
    #[must_use]
    pub fn has_member(&self, student_id: &str) -> bool {
        self.members.iter().any(|m| m == student_id)
    }
}
