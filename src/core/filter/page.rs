//! Client-side pagination

/// One page of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number actually shown
    pub number: usize,
    /// Page size used
    pub per_page: usize,
    /// Items across all pages
    pub total_items: usize,
    /// Page count, never below 1
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// A later page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// An earlier page exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }
}

/// Slice out page `number` (1-based) of `items`
///
/// A `per_page` of 0 is treated as 1. Page numbers below 1 show the first
/// page and numbers past the end show the last page.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], number: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let number = number.clamp(1, total_pages);
    let start = (number - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        number,
        per_page,
        total_items: items.len(),
        total_pages,
    }
}
