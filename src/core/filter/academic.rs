//! Student and teacher list criteria

use super::{contains_ci, field_matches, search_term, Criteria};
use crate::core::catalog::Catalog;
use crate::core::hierarchy::branches_by_degree;
use crate::core::models::{Branch, Status, Student, Teacher};

/// Criteria for the student list
///
/// `branch_id` depends on `degree_id`: changing the degree through
/// [`StudentFilter::with_degree`] clears the branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Matches name, roll number, or email
    pub search: Option<String>,
    /// Exact degree id
    pub degree_id: Option<String>,
    /// Exact branch id
    pub branch_id: Option<String>,
    /// Exact semester
    pub semester: Option<u8>,
    /// Exact batch (admission year)
    pub batch: Option<u16>,
    /// Exact status
    pub status: Option<Status>,
}

impl StudentFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }

    /// Set or clear the degree; always clears the dependent branch
    #[must_use]
    pub fn with_degree(mut self, degree_id: Option<&str>) -> Self {
        self.degree_id = degree_id.map(str::to_string);
        self.branch_id = None;
        self
    }

    /// Set or clear the branch
    #[must_use]
    pub fn with_branch(mut self, branch_id: Option<&str>) -> Self {
        self.branch_id = branch_id.map(str::to_string);
        self
    }

    /// Set or clear the semester
    #[must_use]
    pub const fn with_semester(mut self, semester: Option<u8>) -> Self {
        self.semester = semester;
        self
    }

    /// Set or clear the batch year
    #[must_use]
    pub const fn with_batch(mut self, batch: Option<u16>) -> Self {
        self.batch = batch;
        self
    }

    /// Set or clear the status
    #[must_use]
    pub const fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    /// Branches offered by the branch picker for the current degree
    #[must_use]
    pub fn branch_options<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Branch> {
        self.degree_id.as_deref().map_or_else(
            || catalog.branches.iter().collect(),
            |degree_id| branches_by_degree(catalog, degree_id),
        )
    }
}

impl Criteria<Student> for StudentFilter {
    fn matches(&self, s: &Student) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|term| {
            contains_ci(&s.name, term) || contains_ci(&s.roll_no, term) || contains_ci(&s.email, term)
        });

        search_ok
            && field_matches(self.degree_id.as_deref(), s.degree_id.as_str())
            && field_matches(self.branch_id.as_deref(), s.branch_id.as_str())
            && field_matches(self.semester.as_ref(), &s.semester)
            && field_matches(self.batch.as_ref(), &s.batch)
            && field_matches(self.status.as_ref(), &s.status)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Criteria for the faculty list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherFilter {
    /// Matches name, employee id, email, or any subject
    pub search: Option<String>,
    /// Exact department id
    pub department_id: Option<String>,
    /// Designation, case-insensitive
    pub designation: Option<String>,
    /// Teaches this subject, case-insensitive
    pub subject: Option<String>,
    /// Exact status
    pub status: Option<Status>,
}

impl TeacherFilter {
    /// Set or clear the search text
    #[must_use]
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search_term(search);
        self
    }

    /// Set or clear the department
    #[must_use]
    pub fn with_department(mut self, department_id: Option<&str>) -> Self {
        self.department_id = department_id.map(str::to_string);
        self
    }

    /// Set or clear the designation
    #[must_use]
    pub fn with_designation(mut self, designation: Option<&str>) -> Self {
        self.designation = designation.map(str::to_string);
        self
    }

    /// Set or clear the subject
    #[must_use]
    pub fn with_subject(mut self, subject: Option<&str>) -> Self {
        self.subject = subject.map(str::to_string);
        self
    }

    /// Set or clear the status
    #[must_use]
    pub const fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }
}

impl Criteria<Teacher> for TeacherFilter {
    fn matches(&self, t: &Teacher) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|term| {
            contains_ci(&t.name, term)
                || contains_ci(&t.employee_id, term)
                || contains_ci(&t.email, term)
                || t.subjects.iter().any(|s| contains_ci(s, term))
        });

        search_ok
            && field_matches(self.department_id.as_deref(), t.department_id.as_str())
            && self
                .designation
                .as_deref()
                .is_none_or(|d| t.designation.eq_ignore_ascii_case(d))
            && self.subject.as_deref().is_none_or(|s| t.teaches(s))
            && field_matches(self.status.as_ref(), &t.status)
    }

    fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}
