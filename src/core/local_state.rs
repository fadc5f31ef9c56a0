//! Page-local mutable state
//!
//! Both types start from a copy of catalog rows and change only that copy.
//! Nothing is written back.

use super::catalog::Catalog;
use super::models::{LeaveRequest, LeaveStatus, Notification, Role};
use super::submit::SubmitError;

/// Review queue over a copy of the leave requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveQueue {
    requests: Vec<LeaveRequest>,
}

impl LeaveQueue {
    /// Queue over every request in the catalog
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            requests: catalog.leave_requests.clone(),
        }
    }

    /// Queue over requests filed by one role
    #[must_use]
    pub fn for_applicants(catalog: &Catalog, role: Role) -> Self {
        Self {
            requests: catalog
                .leave_requests
                .iter()
                .filter(|r| r.applicant_role == role)
                .cloned()
                .collect(),
        }
    }

    /// All requests, in catalog order
    #[must_use]
    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    /// Requests still awaiting review
    pub fn pending(&self) -> impl Iterator<Item = &LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
    }

    /// Number of requests awaiting review
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    /// Grant a pending request
    ///
    /// # Errors
    /// [`SubmitError::NotFound`] for an unknown id, [`SubmitError::Conflict`]
    /// when the request was already reviewed
    pub fn approve(&mut self, id: &str) -> Result<&LeaveRequest, SubmitError> {
        self.review(id, LeaveStatus::Approved)
    }

    /// Refuse a pending request
    ///
    /// # Errors
    /// Same as [`LeaveQueue::approve`]
    pub fn reject(&mut self, id: &str) -> Result<&LeaveRequest, SubmitError> {
        self.review(id, LeaveStatus::Rejected)
    }

    fn review(&mut self, id: &str, outcome: LeaveStatus) -> Result<&LeaveRequest, SubmitError> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| SubmitError::NotFound(format!("leave request '{id}'")))?;

        if request.status != LeaveStatus::Pending {
            return Err(SubmitError::Conflict(format!(
                "leave request '{id}' is already {}",
                request.status
            )));
        }

        request.status = outcome;
        crate::debug!("Leave request {id} marked {outcome}");
        Ok(request)
    }
}

/// Notification panel of one role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    notifications: Vec<Notification>,
}

impl Inbox {
    /// Notifications addressed to `role`, newest first
    #[must_use]
    pub fn for_role(catalog: &Catalog, role: Role) -> Self {
        let mut notifications: Vec<Notification> = catalog
            .notifications
            .iter()
            .filter(|n| n.recipient == role)
            .cloned()
            .collect();
        notifications.sort_by(|a, b| b.created_on.cmp(&a.created_on));
        Self { notifications }
    }

    /// Every notification in the panel
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Unseen notifications
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read; `false` if the id is not in this panel
    pub fn mark_read(&mut self, id: &str) -> bool {
        self.notifications
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| n.read = true)
            .is_some()
    }

    /// Mark everything read, returning how many changed
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.notifications.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        changed
    }
}
