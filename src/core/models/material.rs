//! Study material model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of study material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Lecture notes
    Notes,
    /// Assignment sheet
    Assignment,
    /// Presentation slides
    Slides,
    /// Reading list or reference text
    Reference,
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Notes => "notes",
            Self::Assignment => "assignment",
            Self::Slides => "slides",
            Self::Reference => "reference",
        };
        f.write_str(label)
    }
}

/// Material shared by a teacher with a branch and semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Subject
    pub subject: String,
    /// Uploading teacher
    pub teacher_id: String,
    /// Target branch
    pub branch_id: String,
    /// Target semester
    pub semester: u8,
    /// Kind of material
    pub kind: MaterialKind,
    /// Upload date
    pub uploaded_on: NaiveDate,
}
