//! Library models: books, issued copies and members
//!
//! A book's availability is always derived from its copy counts through
//! [`StockStatus::classify`]; it is never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default low-stock threshold, as a percentage of total copies
pub const DEFAULT_LOW_STOCK_PERCENT: u8 = 30;

/// Three-way availability of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Enough copies on the shelf
    Available,
    /// Some copies left, below the threshold
    LowStock,
    /// No copies on the shelf
    OutOfStock,
}

impl StockStatus {
    /// Classify a title from its copy counts.
    ///
    /// * `available == 0` or `total == 0` → [`StockStatus::OutOfStock`]
    /// * `available * 100 < total * low_stock_percent` → [`StockStatus::LowStock`]
    /// * otherwise → [`StockStatus::Available`]
    #[must_use]
    pub const fn classify(available: u32, total: u32, low_stock_percent: u8) -> Self {
        if available == 0 || total == 0 {
            return Self::OutOfStock;
        }
        if (available as u64) * 100 < (total as u64) * (low_stock_percent as u64) {
            Self::LowStock
        } else {
            Self::Available
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::LowStock => write!(f, "low-stock"),
            Self::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

/// A catalogued title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier
    pub id: String,
    /// ISBN-13
    pub isbn: String,
    /// Title
    pub title: String,
    /// Author(s)
    pub author: String,
    /// Shelf category (e.g., "Computer Science")
    pub category: String,
    /// Copies owned
    pub total_copies: u32,
    /// Copies on the shelf
    pub available_copies: u32,
}

impl Book {
    /// Copies currently lent out
    #[must_use]
    pub const fn issued_copies(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }

    /// Derived availability at the given threshold
    #[must_use]
    pub const fn stock_status(&self, low_stock_percent: u8) -> StockStatus {
        StockStatus::classify(self.available_copies, self.total_copies, low_stock_percent)
    }
}

/// A copy lent to a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedBook {
    /// Unique identifier
    pub id: String,
    /// Lent title
    pub book_id: String,
    /// Borrower
    pub student_id: String,
    /// Lending date
    pub issue_date: NaiveDate,
    /// Return deadline
    pub due_date: NaiveDate,
    /// Set once returned
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
}

impl IssuedBook {
    /// Still with the borrower
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        self.return_date.is_none()
    }

    /// Outstanding past its due date as of `today`
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_outstanding() && today > self.due_date
    }
}

/// Library membership of a student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: String,
    /// Student holding the membership
    pub student_id: String,
    /// Membership start
    pub member_since: NaiveDate,
    /// Concurrent loan limit
    pub max_books: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(StockStatus::classify(0, 10, 30), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(2, 10, 30), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(3, 10, 30), StockStatus::Available);
        assert_eq!(StockStatus::classify(10, 10, 30), StockStatus::Available);
    }

    #[test]
    fn test_classify_empty_title_is_out_of_stock() {
        assert_eq!(StockStatus::classify(0, 0, 30), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(3, 0, 30), StockStatus::OutOfStock);
    }

    #[test]
    fn test_classify_single_copy_never_low() {
        // 1 of 1 is 100%, 1 of 4 is 25%
        assert_eq!(StockStatus::classify(1, 1, 30), StockStatus::Available);
        assert_eq!(StockStatus::classify(1, 4, 30), StockStatus::LowStock);
    }

    #[test]
    fn test_issued_copies_saturates() {
        let book = Book {
            id: "bk-1".to_string(),
            isbn: "9780262033848".to_string(),
            title: "Introduction to Algorithms".to_string(),
            author: "Cormen et al.".to_string(),
            category: "Computer Science".to_string(),
            total_copies: 5,
            available_copies: 7,
        };

        assert_eq!(book.issued_copies(), 0);
        assert_eq!(book.stock_status(30), StockStatus::Available);
    }

    #[test]
    fn test_overdue_requires_outstanding() {
        let due = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let mut loan = IssuedBook {
            id: "iss-1".to_string(),
            book_id: "bk-1".to_string(),
            student_id: "stu-1".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            due_date: due,
            return_date: None,
        };
        let later = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

        assert!(loan.is_overdue(later));
        assert!(!loan.is_overdue(due));

        loan.return_date = Some(later);
        assert!(!loan.is_overdue(later));
    }
}
