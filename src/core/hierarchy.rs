//! Academic hierarchy resolution: degree → course → branch
//!
//! Every function here is a read-only projection over the catalog. A broken
//! link anywhere in the chain resolves to `None`.

use super::catalog::Catalog;
use super::models::{Branch, Course, Degree, Student};

/// A branch together with the course and degree it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicPath<'a> {
    /// Top of the chain
    pub degree: &'a Degree,
    /// Middle of the chain
    pub course: &'a Course,
    /// The branch that was resolved
    pub branch: &'a Branch,
}

impl AcademicPath<'_> {
    /// Breadcrumb label (e.g., "B.Tech / Engineering / Civil Engineering")
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} / {} / {}",
            self.degree.code, self.course.name, self.branch.name
        )
    }
}

/// Resolve a branch id to its full path
///
/// Returns `None` when the id is empty, the branch is unknown, or its course or
/// degree link is broken.
#[must_use]
pub fn resolve_branch<'a>(catalog: &'a Catalog, branch_id: &str) -> Option<AcademicPath<'a>> {
    if branch_id.is_empty() {
        return None;
    }
    let branch = catalog.branch(branch_id)?;
    let course = catalog.course(&branch.course_id)?;
    let degree = catalog.degree(&course.degree_id)?;
    Some(AcademicPath {
        degree,
        course,
        branch,
    })
}

/// Resolve the path of a student's branch
///
/// Also `None` when the student's own `degree_id` disagrees with the degree
/// reached through the branch.
#[must_use]
pub fn resolve_student<'a>(catalog: &'a Catalog, student: &Student) -> Option<AcademicPath<'a>> {
    resolve_branch(catalog, &student.branch_id).filter(|path| path.degree.id == student.degree_id)
}

/// Courses under a degree, in catalog order
#[must_use]
pub fn courses_by_degree<'a>(catalog: &'a Catalog, degree_id: &str) -> Vec<&'a Course> {
    catalog
        .courses
        .iter()
        .filter(|c| c.degree_id == degree_id)
        .collect()
}

/// Branches under a course, in catalog order
#[must_use]
pub fn branches_by_course<'a>(catalog: &'a Catalog, course_id: &str) -> Vec<&'a Branch> {
    catalog
        .branches
        .iter()
        .filter(|b| b.course_id == course_id)
        .collect()
}

/// Branches reachable from a degree through any of its courses, in catalog order
///
/// This is the option set of a branch picker that depends on a degree picker.
#[must_use]
pub fn branches_by_degree<'a>(catalog: &'a Catalog, degree_id: &str) -> Vec<&'a Branch> {
    let courses = courses_by_degree(catalog, degree_id);
    catalog
        .branches
        .iter()
        .filter(|b| courses.iter().any(|c| c.id == b.course_id))
        .collect()
}
