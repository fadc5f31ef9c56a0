//! Notification model

use super::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A message shown in a role's notification panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: String,
    /// Section the notification is shown in
    pub recipient: Role,
    /// Headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Posting date
    pub created_on: NaiveDate,
    /// Already seen
    #[serde(default)]
    pub read: bool,
}
