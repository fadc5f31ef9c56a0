//! Portal roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three role-scoped sections of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrative staff
    Admin,
    /// Faculty
    Teacher,
    /// Enrolled student
    Student,
}

impl Role {
    /// All roles in section order
    pub const ALL: [Self; 3] = [Self::Admin, Self::Teacher, Self::Student];

    /// Path segment and config name (e.g., "admin")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "teacher" | "faculty" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            _ => Err(format!("Unknown role: '{s}'")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An administrative staff account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    /// Login identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
}
