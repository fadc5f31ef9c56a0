//! Criteria for events, library, leave, fees, materials and activities

use super::{contains_ci, field_matches, search_term, spans_overlap, Criteria};
use crate::core::models::{
    Activity, ActivityCategory, Book, Event, EventStatus, EventType, FeeRecord, FeeStatus,
    LeaveKind, LeaveRequest, LeaveStatus, Material, MaterialKind, Role, StockStatus,
    DEFAULT_LOW_STOCK_PERCENT,
};
use chrono::NaiveDate;

/// Criteria for the event calendar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Matches title or venue
    pub search: Option<String>,
    /// Exact type
    pub event_type: Option<EventType>,
    /// Exact status
    pub status: Option<EventStatus>,
    /// Event must end on or after this day
    pub from: Option<NaiveDate>,
    /// Event must start on or before this day
    pub to: Option<NaiveDate>,
}

impl EventFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }

    /// Set or clear the type
    #[must_use]
    pub const fn with_type(mut self, event_type: Option<EventType>) -> Self {
        self.event_type = event_type;
        self
    }

    /// Set or clear the status
    #[must_use]
    pub const fn with_status(mut self, status: Option<EventStatus>) -> Self {
        self.status = status;
        self
    }

    /// Set or clear the date range
    #[must_use]
    pub const fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }
}

impl Criteria<Event> for EventFilter {
    fn matches(&self, e: &Event) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| contains_ci(&e.title, term) || contains_ci(&e.venue, term))
            && field_matches(self.event_type.as_ref(), &e.event_type)
            && field_matches(self.status.as_ref(), &e.status)
            && e.overlaps(self.from, self.to)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Criteria for the library catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFilter {
    /// Matches title, author, or ISBN
    pub search: Option<String>,
    /// Category, case-insensitive
    pub category: Option<String>,
    /// Derived stock status
    pub stock: Option<StockStatus>,
    /// Threshold used to derive `stock`
    pub low_stock_percent: u8,
}

impl Default for BookFilter {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            stock: None,
            low_stock_percent: DEFAULT_LOW_STOCK_PERCENT,
        }
    }
}

impl BookFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }

    /// Set or clear the category
    #[must_use]
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_string);
        self
    }

    /// Set or clear the stock status
    #[must_use]
    pub const fn with_stock(mut self, stock: Option<StockStatus>) -> Self {
        self.stock = stock;
        self
    }

    /// Use a different low-stock threshold
    #[must_use]
    pub const fn with_threshold(mut self, low_stock_percent: u8) -> Self {
        self.low_stock_percent = low_stock_percent;
        self
    }
}

impl Criteria<Book> for BookFilter {
    fn matches(&self, b: &Book) -> bool {
        self.search.as_deref().is_none_or(|term| {
            contains_ci(&b.title, term) || contains_ci(&b.author, term) || contains_ci(&b.isbn, term)
        }) && self
            .category
            .as_deref()
            .is_none_or(|c| b.category.eq_ignore_ascii_case(c))
            && self
                .stock
                .is_none_or(|s| b.stock_status(self.low_stock_percent) == s)
    }

    fn is_unset(&self) -> bool {
        self.search.is_none() && self.category.is_none() && self.stock.is_none()
    }
}

/// Criteria for the leave list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveFilter {
    /// Matches the reason text
    pub search: Option<String>,
    /// Exact applicant id
    pub applicant_id: Option<String>,
    /// Applicant role
    pub applicant_role: Option<Role>,
    /// Exact kind
    pub kind: Option<LeaveKind>,
    /// Exact status
    pub status: Option<LeaveStatus>,
    /// Leave must end on or after this day
    pub from: Option<NaiveDate>,
    /// Leave must start on or before this day
    pub to: Option<NaiveDate>,
}

impl LeaveFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }

    /// Set or clear the applicant
    #[must_use]
    pub fn with_applicant(mut self, applicant_id: Option<&str>) -> Self {
        self.applicant_id = applicant_id.map(str::to_string);
        self
    }

    /// Set or clear the applicant role
    #[must_use]
    pub const fn with_role(mut self, role: Option<Role>) -> Self {
        self.applicant_role = role;
        self
    }

    /// Set or clear the kind
    #[must_use]
    pub const fn with_kind(mut self, kind: Option<LeaveKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Set or clear the status
    #[must_use]
    pub const fn with_status(mut self, status: Option<LeaveStatus>) -> Self {
        self.status = status;
        self
    }

    /// Set or clear the date range
    #[must_use]
    pub const fn with_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }
}

impl Criteria<LeaveRequest> for LeaveFilter {
    fn matches(&self, l: &LeaveRequest) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| contains_ci(&l.reason, term))
            && field_matches(self.applicant_id.as_deref(), l.applicant_id.as_str())
            && field_matches(self.applicant_role.as_ref(), &l.applicant_role)
            && field_matches(self.kind.as_ref(), &l.kind)
            && field_matches(self.status.as_ref(), &l.status)
            && spans_overlap(l.from, l.to, self.from, self.to)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Criteria for fee records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeFilter {
    /// Exact student id
    pub student_id: Option<String>,
    /// Exact semester
    pub semester: Option<u8>,
    /// Exact status
    pub status: Option<FeeStatus>,
    /// Only records with a balance left
    pub outstanding_only: bool,
}

impl Criteria<FeeRecord> for FeeFilter {
    fn matches(&self, f: &FeeRecord) -> bool {
        field_matches(self.student_id.as_deref(), f.student_id.as_str())
            && field_matches(self.semester.as_ref(), &f.semester)
            && field_matches(self.status.as_ref(), &f.status)
            && (!self.outstanding_only || f.balance() > 0)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Criteria for study materials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialFilter {
    /// Matches title or subject
    pub search: Option<String>,
    /// Exact uploading teacher
    pub teacher_id: Option<String>,
    /// Exact branch
    pub branch_id: Option<String>,
    /// Exact semester
    pub semester: Option<u8>,
    /// Exact kind
    pub kind: Option<MaterialKind>,
}

impl MaterialFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }
}

impl Criteria<Material> for MaterialFilter {
    fn matches(&self, m: &Material) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| contains_ci(&m.title, term) || contains_ci(&m.subject, term))
            && field_matches(self.teacher_id.as_deref(), m.teacher_id.as_str())
            && field_matches(self.branch_id.as_deref(), m.branch_id.as_str())
            && field_matches(self.semester.as_ref(), &m.semester)
            && field_matches(self.kind.as_ref(), &m.kind)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Criteria for extracurricular activities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Matches the activity name
    pub search: Option<String>,
    /// Exact category
    pub category: Option<ActivityCategory>,
    /// Accepting members or not
    pub open: Option<bool>,
    /// Has this student as a member
    pub member_id: Option<String>,
}

impl ActivityFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }
}

impl Criteria<Activity> for ActivityFilter {
    fn matches(&self, a: &Activity) -> bool {
        self.search
            .as_deref()
            .is_none_or(|term| contains_ci(&a.name, term))
            && field_matches(self.category.as_ref(), &a.category)
            && field_matches(self.open.as_ref(), &a.open)
            && self.member_id.as_deref().is_none_or(|id| a.has_member(id))
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
