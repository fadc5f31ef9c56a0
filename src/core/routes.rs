//! Role-prefixed routing surface
//!
//! Every path except `/login` lives under a role prefix (`/admin`, `/teacher`,
//! `/student`) and is gated on that role.

use super::models::Role;
use super::session::LOGIN_PATH;
use std::fmt;

/// A page inside a role's section
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum View {
    /// Section landing page
    Dashboard,
    /// Student list
    Students,
    /// One student
    Student(String),
    /// Faculty list
    Teachers,
    /// One teacher
    Teacher(String),
    /// Event calendar
    Events,
    /// Library catalogue / loans
    Library,
    /// Leave requests
    Leave,
    /// Degree → course → branch tree
    Academics,
    /// Attendance
    Attendance,
    /// Study materials
    Materials,
    /// Extracurricular activities
    Activities,
    /// Fee records
    Fees,
}

impl View {
    /// Whether `role`'s section has this page
    #[must_use]
    pub const fn available_to(&self, role: Role) -> bool {
        match role {
            Role::Admin => matches!(
                self,
                Self::Dashboard
                    | Self::Students
                    | Self::Student(_)
                    | Self::Teachers
                    | Self::Teacher(_)
                    | Self::Events
                    | Self::Library
                    | Self::Leave
                    | Self::Academics
            ),
            Role::Teacher => matches!(
                self,
                Self::Dashboard
                    | Self::Students
                    | Self::Student(_)
                    | Self::Events
                    | Self::Attendance
                    | Self::Materials
                    | Self::Leave
            ),
            Role::Student => matches!(
                self,
                Self::Dashboard
                    | Self::Events
                    | Self::Attendance
                    | Self::Library
                    | Self::Materials
                    | Self::Activities
                    | Self::Fees
                    | Self::Leave
            ),
        }
    }

    fn parse(segments: &[&str]) -> Option<Self> {
        let view = match segments {
            [] => Self::Dashboard,
            ["students"] => Self::Students,
            ["students", id] => Self::Student((*id).to_string()),
            ["teachers"] => Self::Teachers,
            ["teachers", id] => Self::Teacher((*id).to_string()),
            ["events"] => Self::Events,
            ["library"] => Self::Library,
            ["leave"] => Self::Leave,
            ["academics"] => Self::Academics,
            ["attendance"] => Self::Attendance,
            ["materials"] => Self::Materials,
            ["activities"] => Self::Activities,
            ["fees"] => Self::Fees,
            _ => return None,
        };
        Some(view)
    }

    fn suffix(&self) -> String {
        match self {
            Self::Dashboard => String::new(),
            Self::Students => "/students".to_string(),
            Self::Student(id) => format!("/students/{id}"),
            Self::Teachers => "/teachers".to_string(),
            Self::Teacher(id) => format!("/teachers/{id}"),
            Self::Events => "/events".to_string(),
            Self::Library => "/library".to_string(),
            Self::Leave => "/leave".to_string(),
            Self::Academics => "/academics".to_string(),
            Self::Attendance => "/attendance".to_string(),
            Self::Materials => "/materials".to_string(),
            Self::Activities => "/activities".to_string(),
            Self::Fees => "/fees".to_string(),
        }
    }
}

/// A parsed portal path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// The login boundary
    Login,
    /// A page in a role's section
    Section {
        /// Section owner
        role: Role,
        /// Page within the section
        view: View,
    },
}

impl Route {
    /// Parse a path such as `/admin/students/stu-001`
    ///
    /// Trailing slashes are ignored. Unknown paths, and pages a section does
    /// not have, return `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.split_first() {
            Some((&"login", [])) => Some(Self::Login),
            Some((prefix, rest)) => {
                let role: Role = prefix.parse().ok()?;
                // only the canonical prefix names a section
                if role.as_str() != *prefix {
                    return None;
                }
                let view = View::parse(rest)?;
                view.available_to(role)
                    .then_some(Self::Section { role, view })
            }
            None => None,
        }
    }

    /// Section route for `role`, if that section has the page
    #[must_use]
    pub fn section(role: Role, view: View) -> Option<Self> {
        view.available_to(role)
            .then_some(Self::Section { role, view })
    }

    /// Landing page of a role
    #[must_use]
    pub const fn home(role: Role) -> Self {
        Self::Section {
            role,
            view: View::Dashboard,
        }
    }

    /// Role the route is gated on; `None` for the login boundary
    #[must_use]
    pub const fn required_role(&self) -> Option<Role> {
        match self {
            Self::Login => None,
            Self::Section { role, .. } => Some(*role),
        }
    }

    /// Canonical path
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => LOGIN_PATH.to_string(),
            Self::Section { role, view } => format!("/{}{}", role.as_str(), view.suffix()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
