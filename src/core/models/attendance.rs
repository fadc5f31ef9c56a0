//! Attendance record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One student's presence in one class session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier
    pub id: String,
    /// Student marked
    pub student_id: String,
    /// Subject of the session
    pub subject: String,
    /// Session date
    pub date: NaiveDate,
    /// Present or absent
    pub present: bool,
}

/// Attendance as a percentage of sessions attended, `None` with no sessions
#[must_use]
pub fn attendance_percentage<'a, I>(records: I) -> Option<f32>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let (present, total) = records
        .into_iter()
        .fold((0u32, 0u32), |(p, t), r| (p + u32::from(r.present), t + 1));
    if total == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    Some(present as f32 * 100.0 / total as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, present: bool) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            student_id: "stu-1".to_string(),
            subject: "Data Structures".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            present,
        }
    }

    #[test]
    fn test_percentage() {
        let records = [
            record("a1", true),
            record("a2", true),
            record("a3", false),
            record("a4", true),
        ];

        let pct = attendance_percentage(&records).unwrap();
        assert!((pct - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_percentage_without_sessions() {
        assert!(attendance_percentage(std::iter::empty::<&AttendanceRecord>()).is_none());
    }
}
