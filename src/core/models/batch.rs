//! Batch model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Admission-year cohort of students
///
/// Students reference a batch by its `year`, not by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Unique identifier
    pub id: String,

    /// Admission year (e.g., 2021)
    pub year: u16,

    /// Date classes started for this cohort
    pub admission_date: NaiveDate,

    /// Expected graduation year
    pub graduation_year: u16,

    /// Whether the cohort is still enrolled
    pub is_active: bool,
}

impl Batch {
    /// Label shown in batch pickers (e.g., "2021-2025")
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.year, self.graduation_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_label() {
        let batch = Batch {
            id: "batch-2021".to_string(),
            year: 2021,
            admission_date: NaiveDate::from_ymd_opt(2021, 8, 1).unwrap(),
            graduation_year: 2025,
            is_active: true,
        };

        assert_eq!(batch.label(), "2021-2025");
    }
}
