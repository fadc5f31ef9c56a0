//! Dashboard summaries for each role's landing page

use super::catalog::Catalog;
use super::local_state::Inbox;
use super::models::{
    attendance_percentage, Activity, Event, EventStatus, IssuedBook, LeaveStatus, Material, Role,
    StockStatus,
};
use chrono::NaiveDate;

/// Upcoming events in start order
fn upcoming_events(catalog: &Catalog) -> Vec<&Event> {
    let mut events: Vec<&Event> = catalog
        .events
        .iter()
        .filter(|e| e.status == EventStatus::Upcoming)
        .collect();
    events.sort_by_key(|e| e.start_date);
    events
}

/// Institution-wide counters
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSummary<'a> {
    /// Students on the roll
    pub total_students: usize,
    /// Students with active status
    pub active_students: usize,
    /// Teachers on the roll
    pub total_teachers: usize,
    /// Teachers with active status
    pub active_teachers: usize,
    /// Upcoming events, soonest first
    pub upcoming_events: Vec<&'a Event>,
    /// Titles below the low-stock threshold
    pub low_stock_books: usize,
    /// Titles with no copy on the shelf
    pub out_of_stock_books: usize,
    /// Leave requests awaiting review
    pub pending_leave: usize,
    /// Unread admin notifications
    pub unread_notifications: usize,
}

impl<'a> AdminSummary<'a> {
    /// Summarize the catalog
    #[must_use]
    pub fn build(catalog: &'a Catalog, low_stock_percent: u8) -> Self {
        let stock = |wanted: StockStatus| {
            catalog
                .books
                .iter()
                .filter(|b| b.stock_status(low_stock_percent) == wanted)
                .count()
        };

        Self {
            total_students: catalog.students.len(),
            active_students: catalog.students.iter().filter(|s| s.is_active()).count(),
            total_teachers: catalog.teachers.len(),
            active_teachers: catalog.teachers.iter().filter(|t| t.is_active()).count(),
            upcoming_events: upcoming_events(catalog),
            low_stock_books: stock(StockStatus::LowStock),
            out_of_stock_books: stock(StockStatus::OutOfStock),
            pending_leave: catalog
                .leave_requests
                .iter()
                .filter(|r| r.status == LeaveStatus::Pending)
                .count(),
            unread_notifications: Inbox::for_role(catalog, Role::Admin).unread_count(),
        }
    }
}

/// One teacher's landing page
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherSummary<'a> {
    /// Display name
    pub name: &'a str,
    /// Subjects taught
    pub subjects: &'a [String],
    /// Materials this teacher uploaded
    pub materials: Vec<&'a Material>,
    /// Student leave requests awaiting review
    pub pending_student_leave: usize,
    /// Upcoming events, soonest first
    pub upcoming_events: Vec<&'a Event>,
    /// Unread teacher notifications
    pub unread_notifications: usize,
}

impl<'a> TeacherSummary<'a> {
    /// Summary for `teacher_id`; `None` if no such teacher exists
    #[must_use]
    pub fn build(catalog: &'a Catalog, teacher_id: &str) -> Option<Self> {
        let teacher = catalog.teacher(teacher_id)?;
        Some(Self {
            name: &teacher.name,
            subjects: &teacher.subjects,
            materials: catalog
                .materials
                .iter()
                .filter(|m| m.teacher_id == teacher.id)
                .collect(),
            pending_student_leave: catalog
                .leave_requests
                .iter()
                .filter(|r| r.applicant_role == Role::Student && r.status == LeaveStatus::Pending)
                .count(),
            upcoming_events: upcoming_events(catalog),
            unread_notifications: Inbox::for_role(catalog, Role::Teacher).unread_count(),
        })
    }
}

/// One student's landing page
#[derive(Debug, Clone, PartialEq)]
pub struct StudentSummary<'a> {
    /// Display name
    pub name: &'a str,
    /// Roll number
    pub roll_no: &'a str,
    /// "B.Tech / Engineering / ..." when the hierarchy resolves
    pub program: Option<String>,
    /// Share of classes attended, `None` without records
    pub attendance_percent: Option<f32>,
    /// Books not yet returned
    pub loans: Vec<&'a IssuedBook>,
    /// Loans past their due date
    pub overdue_loans: usize,
    /// Unpaid balance across all fee records
    pub fees_outstanding: u32,
    /// Activities joined
    pub activities: Vec<&'a Activity>,
    /// Leave requests awaiting review
    pub pending_leave: usize,
}

impl<'a> StudentSummary<'a> {
    /// Summary for `student_id` as of `today`; `None` if no such student exists
    #[must_use]
    pub fn build(catalog: &'a Catalog, student_id: &str, today: NaiveDate) -> Option<Self> {
        let student = catalog.student(student_id)?;
        let id = student.id.as_str();
        let loans: Vec<&IssuedBook> = catalog.outstanding_loans_of(id).collect();

        Some(Self {
            name: &student.name,
            roll_no: &student.roll_no,
            program: super::hierarchy::resolve_student(catalog, student).map(|p| p.label()),
            attendance_percent: attendance_percentage(catalog.attendance_of(id)),
            overdue_loans: loans.iter().filter(|l| l.is_overdue(today)).count(),
            loans,
            fees_outstanding: catalog.fees_of(id).map(|f| f.balance()).sum(),
            activities: catalog.activities_of(id).collect(),
            pending_leave: catalog
                .leave_requests
                .iter()
                .filter(|r| r.applicant_id == id && r.status == LeaveStatus::Pending)
                .count(),
        })
    }
}
