//! Roll-number generation
//!
//! A roll number is the last two digits of the batch year, the branch code,
//! and a serial zero-padded to three digits: `(2021, "CSE", 7)` → `21CSE007`.
//! Serials of 1000 or more keep all their digits.

use super::catalog::Catalog;
use super::models::Branch;

/// Build a roll number from its parts
#[must_use]
pub fn generate_roll_number(batch_year: u16, branch_code: &str, serial: u32) -> String {
    format!("{:02}{branch_code}{serial:03}", batch_year % 100)
}

/// Next roll number for a batch and branch
///
/// The serial is one past the highest serial already issued to that batch and
/// branch, so gaps in the sequence are never reused. Roll numbers that do not
/// follow the `YY` + code + digits layout count towards the cohort size only.
#[must_use]
pub fn next_roll_number(catalog: &Catalog, batch_year: u16, branch: &Branch) -> String {
    let prefix = format!("{:02}{}", batch_year % 100, branch.code);

    let cohort: Vec<&str> = catalog
        .students
        .iter()
        .filter(|s| s.batch == batch_year && s.branch_id == branch.id)
        .map(|s| s.roll_no.as_str())
        .collect();
    let highest = cohort
        .iter()
        .filter_map(|roll| issued_serial(roll, &prefix))
        .max()
        .unwrap_or(0);
    let enrolled = u32::try_from(cohort.len()).unwrap_or(u32::MAX - 1);

    generate_roll_number(batch_year, &branch.code, highest.max(enrolled).saturating_add(1))
}

/// Serial part of `roll_no` when it starts with `prefix` followed only by digits
fn issued_serial(roll_no: &str, prefix: &str) -> Option<u32> {
    let digits = roll_no.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
