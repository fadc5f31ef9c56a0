//! List filtering
//!
//! Each list view owns one immutable criteria value ([`StudentFilter`],
//! [`EventFilter`], ...). Every field is optional: `None` means "no
//! constraint". [`apply_filters`] keeps the items matching all set fields, in
//! their original order. The text search field is the one place where OR
//! applies: it matches if any of the attributes it covers contains the term.

mod academic;
mod page;
mod records;

pub use academic::{StudentFilter, TeacherFilter};
pub use page::{paginate, Page};
pub use records::{
    ActivityFilter, BookFilter, EventFilter, FeeFilter, LeaveFilter, MaterialFilter,
};

use chrono::NaiveDate;

/// A set of criteria that can be tested against one item
pub trait Criteria<T> {
    /// Whether `item` satisfies every set criterion
    fn matches(&self, item: &T) -> bool;

    /// Whether no criterion is set
    fn is_unset(&self) -> bool;
}

/// Items kept by a filter pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult<'a, T> {
    /// Matching items in source order
    pub matches: Vec<&'a T>,
    /// Size of the unfiltered list
    pub total: usize,
}

impl<'a, T> FilterResult<'a, T> {
    /// Nothing matched; the page shows its "No matches" state
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of matches
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Iterate over the matches
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.matches.iter().copied()
    }
}

/// Keep the items that satisfy every set criterion
pub fn apply_filters<'a, T, C>(items: &'a [T], criteria: &C) -> FilterResult<'a, T>
where
    C: Criteria<T> + ?Sized,
{
    FilterResult {
        matches: items.iter().filter(|item| criteria.matches(item)).collect(),
        total: items.len(),
    }
}

/// Normalize a search term: trimmed, lowercased, `None` when blank
pub(crate) fn search_term(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive containment
///
/// Both sides are lowercased here, so criteria built as struct literals
/// (bypassing [`search_term`]) still match regardless of case.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Unset criterion matches anything, otherwise equality
pub(crate) fn field_matches<V: PartialEq + ?Sized>(wanted: Option<&V>, actual: &V) -> bool {
    wanted.is_none_or(|w| w == actual)
}

/// Whether `[start, end]` intersects `[from, to]` (inclusive, open bounds unbounded)
pub(crate) fn spans_overlap(
    start: NaiveDate,
    end: NaiveDate,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    from.is_none_or(|from| end >= from) && to.is_none_or(|to| start <= to)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Criteria<u32> for Even {
        fn matches(&self, item: &u32) -> bool {
            item % 2 == 0
        }

        fn is_unset(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_apply_preserves_order() {
        let items = [4, 1, 8, 3, 2];
        let result = apply_filters(&items, &Even);

        assert_eq!(result.matches, [&4, &8, &2]);
        assert_eq!(result.total, 5);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_search_term_normalization() {
        assert_eq!(search_term(Some("  Aarav ")), Some("aarav".to_string()));
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(None), None);
    }

    #[test]
    fn test_contains_ci_ignores_case_on_both_sides() {
        assert!(contains_ci("Aarav Sharma", "AARAV"));
        assert!(contains_ci("978-007x", "007X"));
        assert!(!contains_ci("Aarav Sharma", "diya"));
    }

    #[test]
    fn test_field_matches_unset() {
        assert!(field_matches::<str>(None, "x"));
        assert!(field_matches(Some("x"), "x"));
        assert!(!field_matches(Some("y"), "x"));
    }
}
