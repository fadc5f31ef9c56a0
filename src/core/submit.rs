//! Form submission
//!
//! Forms hand a validated [`Submission`] to an injected [`Submitter`]. The
//! bundled [`SimulatedSubmitter`] waits a fixed delay and always succeeds;
//! nothing is stored. Repeated submissions are prevented only at the control
//! level, by [`PendingControl`].

use super::catalog::Catalog;
use super::hierarchy::resolve_branch;
use super::models::{LeaveKind, Role, Status};
use super::roll_number::next_roll_number;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

/// Why a submission failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The draft is incomplete or inconsistent
    Validation(Vec<String>),
    /// A referenced record does not exist
    NotFound(String),
    /// The record conflicts with an existing one
    Conflict(String),
    /// The backend could not be reached
    Unavailable(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(problems) => write!(f, "invalid form: {}", problems.join("; ")),
            Self::NotFound(what) => write!(f, "not found: {what}"),
            Self::Conflict(what) => write!(f, "conflict: {what}"),
            Self::Unavailable(why) => write!(f, "service unavailable: {why}"),
        }
    }
}

impl Error for SubmitError {}

/// New-student admission form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Target branch id
    pub branch_id: String,
    /// Admission year
    pub batch: u16,
    /// Starting semester
    pub semester: u8,
}

impl StudentDraft {
    /// Check the draft against the catalog and assign a roll number
    ///
    /// # Errors
    /// Returns [`SubmitError::Validation`] listing every problem found, or
    /// [`SubmitError::Conflict`] when the assigned roll number is already held
    pub fn validate(&self, catalog: &Catalog) -> Result<Submission, SubmitError> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name is required".to_string());
        }
        if !self.email.contains('@') {
            problems.push(format!("'{}' is not an email address", self.email));
        }

        let path = resolve_branch(catalog, &self.branch_id);
        match path {
            None => problems.push(format!("branch '{}' not found", self.branch_id)),
            Some(path) if !path.degree.has_semester(self.semester) => problems.push(format!(
                "semester {} is outside {} (1-{})",
                self.semester, path.degree.code, path.degree.total_semesters
            )),
            Some(_) => {}
        }

        let path = match path {
            Some(path) if problems.is_empty() => path,
            _ => return Err(SubmitError::Validation(problems)),
        };

        let roll_no = next_roll_number(catalog, self.batch, path.branch);
        if let Some(holder) = catalog.student(&roll_no) {
            return Err(SubmitError::Conflict(format!(
                "roll number {roll_no} already belongs to {}",
                holder.id
            )));
        }
        Ok(Submission::Student {
            roll_no,
            degree_id: path.degree.id.clone(),
            draft: self.clone(),
            status: Status::Active,
        })
    }
}

/// Leave application form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveDraft {
    /// Applicant id
    pub applicant_id: String,
    /// Applicant role
    pub applicant_role: Role,
    /// Reason category
    pub kind: LeaveKind,
    /// First day away
    pub from: NaiveDate,
    /// Last day away
    pub to: NaiveDate,
    /// Free-text reason
    pub reason: String,
}

impl LeaveDraft {
    /// Check the draft
    ///
    /// # Errors
    /// Returns [`SubmitError::Validation`] listing every problem found
    pub fn validate(&self) -> Result<Submission, SubmitError> {
        let mut problems = Vec::new();
        if self.reason.trim().is_empty() {
            problems.push("reason is required".to_string());
        }
        if self.from > self.to {
            problems.push(format!("leave ends ({}) before it starts ({})", self.to, self.from));
        }
        if problems.is_empty() {
            Ok(Submission::Leave(self.clone()))
        } else {
            Err(SubmitError::Validation(problems))
        }
    }
}

/// A validated form ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// New student admission
    Student {
        /// Form as entered
        draft: StudentDraft,
        /// Assigned roll number
        roll_no: String,
        /// Degree reached through the branch
        degree_id: String,
        /// Initial status
        status: Status,
    },
    /// Leave application
    Leave(LeaveDraft),
}

impl Submission {
    /// Short description for confirmations
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Student { draft, roll_no, .. } => {
                format!("admission of {} as {roll_no}", draft.name)
            }
            Self::Leave(draft) => format!(
                "{} leave {} to {} for {}",
                draft.kind, draft.from, draft.to, draft.applicant_id
            ),
        }
    }
}

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Reference shown to the user
    pub reference: String,
    /// What was accepted
    pub summary: String,
}

/// Sends submissions somewhere
pub trait Submitter {
    /// Send one submission
    ///
    /// # Errors
    /// Returns a [`SubmitError`] when the submission is refused
    fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError>;
}

/// Waits a fixed delay, then accepts
///
/// Single-shot: no retry, no cancellation, no guard against concurrent calls.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Submitter with the given delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Configured delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let summary = submission.summary();
        crate::debug!("Simulated submission accepted: {summary}");
        Ok(Receipt {
            reference: format!("SIM-{}", chrono::Local::now().format("%Y%m%d%H%M%S")),
            summary,
        })
    }
}

/// Enabled/disabled state of a submit control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingControl {
    pending: bool,
}

impl PendingControl {
    /// Disable the control; `false` if a submission is already pending
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Re-enable the control
    pub fn finish(&mut self) {
        self.pending = false;
    }

    /// Whether the control is disabled
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Run `submitter` unless a submission is already pending
    ///
    /// Returns `None` when the control was disabled.
    pub fn run<S>(&mut self, submitter: &S, submission: &Submission) -> Option<Result<Receipt, SubmitError>>
    where
        S: Submitter + ?Sized,
    {
        if !self.begin() {
            return None;
        }
        let outcome = submitter.submit(submission);
        self.finish();
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::demo_catalog;
    use std::cell::Cell;

    struct Refusing;

    impl Submitter for Refusing {
        fn submit(&self, _submission: &Submission) -> Result<Receipt, SubmitError> {
            Err(SubmitError::Unavailable("offline".to_string()))
        }
    }

    struct Counting(Cell<u32>);

    impl Submitter for Counting {
        fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
            self.0.set(self.0.get() + 1);
            Ok(Receipt {
                reference: format!("T-{}", self.0.get()),
                summary: submission.summary(),
            })
        }
    }

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn leave_draft() -> LeaveDraft {
        LeaveDraft {
            applicant_id: "stu-002".to_string(),
            applicant_role: Role::Student,
            kind: LeaveKind::Sick,
            from: day(2, 3),
            to: day(2, 4),
            reason: "Dental surgery".to_string(),
        }
    }

    #[test]
    fn test_student_draft_assigns_roll_number() {
        let catalog = demo_catalog();
        let draft = StudentDraft {
            name: "Ishaan Bose".to_string(),
            email: "ishaan.bose@greenfield.edu".to_string(),
            branch_id: "br-me".to_string(),
            batch: 2022,
            semester: 5,
        };

        match draft.validate(&catalog).unwrap() {
            Submission::Student {
                roll_no, degree_id, ..
            } => {
                assert_eq!(roll_no, "22ME043");
                assert_eq!(degree_id, "deg-btech");
            }
            Submission::Leave(_) => panic!("expected a student submission"),
        }
    }

    #[test]
    fn test_student_draft_refuses_roll_number_already_held() {
        let mut catalog = demo_catalog();
        // recorded under the 2023 batch but carrying a 2022 roll number
        let mut stray = catalog.student("stu-004").unwrap().clone();
        stray.id = "stu-099".to_string();
        stray.roll_no = "22ME043".to_string();
        stray.batch = 2023;
        catalog.students.push(stray);

        let draft = StudentDraft {
            name: "Ishaan Bose".to_string(),
            email: "ishaan.bose@greenfield.edu".to_string(),
            branch_id: "br-me".to_string(),
            batch: 2022,
            semester: 5,
        };

        match draft.validate(&catalog) {
            Err(SubmitError::Conflict(message)) => {
                assert!(message.contains("22ME043"));
                assert!(message.contains("stu-099"));
            }
            other => panic!("expected a conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_student_draft_collects_all_problems() {
        let catalog = demo_catalog();
        let draft = StudentDraft {
            name: " ".to_string(),
            email: "nope".to_string(),
            branch_id: "br-mtech-cse".to_string(),
            batch: 2024,
            semester: 5,
        };

        let Err(SubmitError::Validation(problems)) = draft.validate(&catalog) else {
            panic!("expected validation failure");
        };
        assert_eq!(problems.len(), 3);
        assert!(problems[2].contains("M.Tech"));
    }

    #[test]
    fn test_student_draft_unknown_branch() {
        let catalog = demo_catalog();
        let draft = StudentDraft {
            name: "Ishaan Bose".to_string(),
            email: "ishaan@greenfield.edu".to_string(),
            branch_id: "br-missing".to_string(),
            batch: 2024,
            semester: 1,
        };

        assert!(matches!(
            draft.validate(&catalog),
            Err(SubmitError::Validation(p)) if p[0].contains("br-missing")
        ));
    }

    #[test]
    fn test_leave_draft_rejects_inverted_range() {
        let mut draft = leave_draft();
        assert!(draft.validate().is_ok());

        draft.from = day(2, 10);
        assert!(matches!(draft.validate(), Err(SubmitError::Validation(_))));
    }

    #[test]
    fn test_simulated_submit_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let submission = leave_draft().validate().unwrap();

        let receipt = submitter.submit(&submission).unwrap();
        assert!(receipt.reference.starts_with("SIM-"));
        assert!(receipt.summary.contains("sick leave"));
    }

    #[test]
    fn test_injected_failure_is_typed() {
        let submission = leave_draft().validate().unwrap();
        let mut control = PendingControl::default();

        let outcome = control.run(&Refusing, &submission).unwrap();
        assert_eq!(outcome, Err(SubmitError::Unavailable("offline".to_string())));
        assert!(!control.is_pending());
    }

    #[test]
    fn test_pending_control_blocks_second_trigger() {
        let submission = leave_draft().validate().unwrap();
        let submitter = Counting(Cell::new(0));
        let mut control = PendingControl::default();

        assert!(control.begin());
        assert!(control.run(&submitter, &submission).is_none());
        assert_eq!(submitter.0.get(), 0);

        control.finish();
        assert!(control.run(&submitter, &submission).is_some());
        assert_eq!(submitter.0.get(), 1);
    }
}
