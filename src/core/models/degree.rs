//! Degree model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level of a degree program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeType {
    /// Bachelor-level program (e.g., B.Tech)
    Undergraduate,
    /// Master-level program (e.g., M.Tech)
    Postgraduate,
    /// Diploma program
    Diploma,
}

impl fmt::Display for DegreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undergraduate => write!(f, "Undergraduate"),
            Self::Postgraduate => write!(f, "Postgraduate"),
            Self::Diploma => write!(f, "Diploma"),
        }
    }
}

/// Top-level program classification (e.g., B.Tech)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// Unique identifier (e.g., "deg-btech")
    pub id: String,

    /// Display name (e.g., "Bachelor of Technology")
    pub name: String,

    /// Short code (e.g., "B.Tech")
    pub code: String,

    /// Program level
    #[serde(rename = "type")]
    pub degree_type: DegreeType,

    /// Duration in years
    pub duration: u8,

    /// Number of semesters in the program
    pub total_semesters: u8,
}

impl Degree {
    /// Create a new degree
    ///
    /// # Arguments
    /// * `id` - Degree identifier
    /// * `name` - Display name
    /// * `code` - Short code
    /// * `degree_type` - Program level
    /// * `duration` - Duration in years
    /// * `total_semesters` - Number of semesters
    #[must_use]
    pub fn new(
        id: &str,
        name: &str,
        code: &str,
        degree_type: DegreeType,
        duration: u8,
        total_semesters: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            degree_type,
            duration,
            total_semesters,
        }
    }

    /// Whether `semester` lies within this program (1-based)
    #[must_use]
    pub const fn has_semester(&self, semester: u8) -> bool {
        semester >= 1 && semester <= self.total_semesters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btech() -> Degree {
        Degree::new(
            "deg-btech",
            "Bachelor of Technology",
            "B.Tech",
            DegreeType::Undergraduate,
            4,
            8,
        )
    }

    #[test]
    fn test_degree_creation() {
        let degree = btech();

        assert_eq!(degree.id, "deg-btech");
        assert_eq!(degree.code, "B.Tech");
        assert_eq!(degree.degree_type, DegreeType::Undergraduate);
        assert_eq!(degree.total_semesters, 8);
    }

    #[test]
    fn test_semester_bounds() {
        let degree = btech();

        assert!(!degree.has_semester(0));
        assert!(degree.has_semester(1));
        assert!(degree.has_semester(8));
        assert!(!degree.has_semester(9));
    }

    #[test]
    fn test_degree_type_serde_name() {
        let parsed: Degree = toml::from_str(
            r#"
id = "deg-dip"
name = "Diploma in Engineering"
code = "Dip"
type = "diploma"
duration = 3
total_semesters = 6
"#,
        )
        .unwrap();

        assert_eq!(parsed.degree_type, DegreeType::Diploma);
        assert_eq!(parsed.degree_type.to_string(), "Diploma");
    }
}
