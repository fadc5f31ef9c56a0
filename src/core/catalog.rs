//! Reference catalog: every table the portal reads from
//!
//! The catalog is built once (from the built-in demo fixtures or a TOML file)
//! and never mutated afterwards. Lookups return `None` for unknown ids.

use super::models::{
    Activity, Administrator, AttendanceRecord, Batch, Book, Branch, Course, Degree, Department,
    Event, FeeRecord, IssuedBook, LeaveRequest, Material, Member, Notification, Student, Teacher,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Failure to load a catalog file
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
    /// The file is not a valid catalog
    Parse(toml::de::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read catalog {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "invalid catalog: {e}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// All reference tables, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Institution name shown in page headers
    #[serde(default)]
    pub institution: String,
    /// Administrative accounts
    #[serde(default)]
    pub admins: Vec<Administrator>,
    /// Degree programs
    #[serde(default)]
    pub degrees: Vec<Degree>,
    /// Courses under degrees
    #[serde(default)]
    pub courses: Vec<Course>,
    /// Branches under courses
    #[serde(default)]
    pub branches: Vec<Branch>,
    /// Admission cohorts
    #[serde(default)]
    pub batches: Vec<Batch>,
    /// Teaching departments
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Students
    #[serde(default)]
    pub students: Vec<Student>,
    /// Faculty
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    /// Campus events
    #[serde(default)]
    pub events: Vec<Event>,
    /// Library titles
    #[serde(default)]
    pub books: Vec<Book>,
    /// Library loans
    #[serde(default)]
    pub issued_books: Vec<IssuedBook>,
    /// Library members
    #[serde(default)]
    pub members: Vec<Member>,
    /// Fee records
    #[serde(default)]
    pub fees: Vec<FeeRecord>,
    /// Leave applications
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
    /// Attendance marks
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Study materials
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Extracurricular activities
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Notifications
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Catalog {
    /// Parse a catalog from TOML
    ///
    /// # Errors
    /// Returns an error if the TOML does not match the catalog schema
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Find a degree by id
    #[must_use]
    pub fn degree(&self, id: &str) -> Option<&Degree> {
        self.degrees.iter().find(|d| d.id == id)
    }

    /// Find a course by id
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Find a branch by id
    #[must_use]
    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    /// Find a branch by its roll-number code (case-insensitive)
    #[must_use]
    pub fn branch_by_code(&self, code: &str) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|b| b.code.eq_ignore_ascii_case(code))
    }

    /// Find a batch by admission year
    #[must_use]
    pub fn batch_by_year(&self, year: u16) -> Option<&Batch> {
        self.batches.iter().find(|b| b.year == year)
    }

    /// Find a department by id
    #[must_use]
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Find an administrator by id
    #[must_use]
    pub fn admin(&self, id: &str) -> Option<&Administrator> {
        self.admins.iter().find(|a| a.id == id)
    }

    /// Find a student by id or roll number
    #[must_use]
    pub fn student(&self, id_or_roll: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id_or_roll || s.roll_no.eq_ignore_ascii_case(id_or_roll))
    }

    /// Find a teacher by id or employee id
    #[must_use]
    pub fn teacher(&self, id_or_employee: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| {
            t.id == id_or_employee || t.employee_id.eq_ignore_ascii_case(id_or_employee)
        })
    }

    /// Find a book by id or ISBN
    #[must_use]
    pub fn book(&self, id_or_isbn: &str) -> Option<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id_or_isbn || b.isbn == id_or_isbn)
    }

    /// Find an event by id
    #[must_use]
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Attendance marks of one student
    pub fn attendance_of<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.attendance
            .iter()
            .filter(move |r| r.student_id == student_id)
    }

    /// Loans of one student that have not been returned
    pub fn outstanding_loans_of<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a IssuedBook> + 'a {
        self.issued_books
            .iter()
            .filter(move |i| i.student_id == student_id && i.is_outstanding())
    }

    /// Fee records of one student
    pub fn fees_of<'a>(&'a self, student_id: &'a str) -> impl Iterator<Item = &'a FeeRecord> + 'a {
        self.fees.iter().filter(move |f| f.student_id == student_id)
    }

    /// Activities a student belongs to
    pub fn activities_of<'a>(
        &'a self,
        student_id: &'a str,
    ) -> impl Iterator<Item = &'a Activity> + 'a {
        self.activities
            .iter()
            .filter(move |a| a.has_member(student_id))
    }

    /// Display name of whoever `applicant_id` refers to, if known
    #[must_use]
    pub fn applicant_name(&self, leave: &LeaveRequest) -> Option<&str> {
        use super::models::Role;
        match leave.applicant_role {
            Role::Student => self.student(&leave.applicant_id).map(|s| s.name.as_str()),
            Role::Teacher => self.teacher(&leave.applicant_id).map(|t| t.name.as_str()),
            Role::Admin => self.admin(&leave.applicant_id).map(|a| a.name.as_str()),
        }
    }

    /// Report foreign keys that do not resolve
    ///
    /// Broken links are tolerated at runtime (lookups return `None`), so this
    /// only reports them.
    ///
    /// # Errors
    /// Returns `Err` with one message per broken link
    pub fn validate_links(&self) -> Result<(), Vec<String>> {
        let mut broken = Vec::new();

        for course in &self.courses {
            if self.degree(&course.degree_id).is_none() {
                broken.push(format!(
                    "Course '{}': degree '{}' not found",
                    course.id, course.degree_id
                ));
            }
        }
        for branch in &self.branches {
            if self.course(&branch.course_id).is_none() {
                broken.push(format!(
                    "Branch '{}': course '{}' not found",
                    branch.id, branch.course_id
                ));
            }
        }
        for student in &self.students {
            if self.degree(&student.degree_id).is_none() {
                broken.push(format!(
                    "Student '{}': degree '{}' not found",
                    student.id, student.degree_id
                ));
            }
            if self.branch(&student.branch_id).is_none() {
                broken.push(format!(
                    "Student '{}': branch '{}' not found",
                    student.id, student.branch_id
                ));
            }
        }
        for teacher in &self.teachers {
            if self.department(&teacher.department_id).is_none() {
                broken.push(format!(
                    "Teacher '{}': department '{}' not found",
                    teacher.id, teacher.department_id
                ));
            }
        }
        for issued in &self.issued_books {
            if self.book(&issued.book_id).is_none() {
                broken.push(format!(
                    "Issued book '{}': book '{}' not found",
                    issued.id, issued.book_id
                ));
            }
            if self.student(&issued.student_id).is_none() {
                broken.push(format!(
                    "Issued book '{}': student '{}' not found",
                    issued.id, issued.student_id
                ));
            }
        }

        if broken.is_empty() {
            Ok(())
        } else {
            Err(broken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
institution = "Test Institute"

[[degrees]]
id = "d1"
name = "Bachelor of Technology"
code = "B.Tech"
type = "undergraduate"
duration = 4
total_semesters = 8

[[courses]]
id = "c1"
degree_id = "d1"
name = "Engineering"
code = "ENG"

[[branches]]
id = "b1"
course_id = "c1"
name = "Computer Science & Engineering"
code = "CSE"
capacity = 60

[[branches]]
id = "b-orphan"
course_id = "c-missing"
name = "Orphan"
code = "ORP"
capacity = 10
"#;

    #[test]
    fn test_from_toml_defaults_missing_tables() {
        let catalog = Catalog::from_toml(SMALL).unwrap();

        assert_eq!(catalog.institution, "Test Institute");
        assert_eq!(catalog.degrees.len(), 1);
        assert_eq!(catalog.branches.len(), 2);
        assert!(catalog.students.is_empty());
        assert!(catalog.books.is_empty());
    }

    #[test]
    fn test_lookups_return_none_for_unknown() {
        let catalog = Catalog::from_toml(SMALL).unwrap();

        assert!(catalog.degree("d1").is_some());
        assert!(catalog.degree("nope").is_none());
        assert!(catalog.branch_by_code("cse").is_some());
        assert!(catalog.student("").is_none());
    }

    #[test]
    fn test_validate_links_reports_orphans() {
        let catalog = Catalog::from_toml(SMALL).unwrap();

        let broken = catalog.validate_links().unwrap_err();
        assert_eq!(broken.len(), 1);
        assert!(broken[0].contains("b-orphan"));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Catalog::from_toml("[[degrees]]\nid = 5").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("invalid catalog"));
    }
}
