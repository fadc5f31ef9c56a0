//! Session context and role gate
//!
//! The session is an explicit value handed to each protected boundary, which
//! calls [`require_role`] before rendering. This is routing convenience over
//! client-held state, not an access-control mechanism: nothing here is
//! verified by a server or protected cryptographically.

use super::catalog::Catalog;
use super::models::Role;
use std::error::Error;
use std::fmt;

/// Where denied callers are sent
pub const LOGIN_PATH: &str = "/login";

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Admin id, teacher id, or student id
    pub id: String,
    /// Display name
    pub name: String,
    /// Section the user belongs to
    pub role: Role,
}

/// Login form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Admin id, teacher id or employee id, student id or roll number
    pub user_id: String,
    /// Password as typed
    pub password: String,
    /// Section the user is signing in to
    pub role: Role,
}

/// Why a login was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// User id or password left blank
    EmptyCredentials,
    /// No user with that id exists in the requested role
    UnknownUser {
        /// Id as typed
        user_id: String,
        /// Role requested
        role: Role,
    },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCredentials => write!(f, "user id and password are required"),
            Self::UnknownUser { user_id, role } => {
                write!(f, "no {role} account named '{user_id}'")
            }
        }
    }
}

impl Error for AuthError {}

/// Validates credentials and yields an identity
pub trait Authenticator {
    /// Check `credentials`
    ///
    /// # Errors
    /// Returns an [`AuthError`] when the credentials are refused
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError>;
}

/// Static-acceptance authenticator over the reference catalog
///
/// Any non-empty password is accepted for a user id that exists in the
/// requested role.
#[derive(Debug, Clone, Copy)]
pub struct DemoAuthenticator<'a> {
    catalog: &'a Catalog,
}

impl<'a> DemoAuthenticator<'a> {
    /// Authenticate against `catalog`
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl Authenticator for DemoAuthenticator<'_> {
    fn authenticate(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let user_id = credentials.user_id.trim();
        if user_id.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }

        let found = match credentials.role {
            Role::Admin => self
                .catalog
                .admin(user_id)
                .map(|a| (a.id.clone(), a.name.clone())),
            Role::Teacher => self
                .catalog
                .teacher(user_id)
                .map(|t| (t.id.clone(), t.name.clone())),
            Role::Student => self
                .catalog
                .student(user_id)
                .map(|s| (s.id.clone(), s.name.clone())),
        };

        found
            .map(|(id, name)| Identity {
                id,
                name,
                role: credentials.role,
            })
            .ok_or_else(|| AuthError::UnknownUser {
                user_id: user_id.to_string(),
                role: credentials.role,
            })
    }
}

/// At most one signed-in identity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// An unauthenticated session
    #[must_use]
    pub const fn new() -> Self {
        Self { identity: None }
    }

    /// Sign in, replacing any current identity
    ///
    /// On failure the session is left as it was.
    ///
    /// # Errors
    /// Returns the authenticator's refusal
    pub fn login<A>(&mut self, authenticator: &A, credentials: &Credentials) -> Result<&Identity, AuthError>
    where
        A: Authenticator + ?Sized,
    {
        let identity = authenticator.authenticate(credentials)?;
        Ok(self.identity.insert(identity))
    }

    /// Sign out unconditionally
    pub fn logout(&mut self) {
        self.identity = None;
    }

    /// Whether someone is signed in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The signed-in identity
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

/// Why the gate refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No one is signed in
    Unauthenticated,
    /// Signed in to a different section
    WrongRole {
        /// Role the section requires
        required: Role,
        /// Role of the signed-in user
        actual: Role,
    },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "not signed in"),
            Self::WrongRole { required, actual } => {
                write!(f, "{required} section is not available to a {actual}")
            }
        }
    }
}

/// Outcome of a role check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    /// Render the section for this identity
    Allow(&'a Identity),
    /// Render nothing; send the caller to `to`
    Redirect {
        /// Redirect target
        to: &'static str,
        /// Why access was refused
        reason: DenyReason,
    },
}

impl<'a> Gate<'a> {
    /// Whether the section may render
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }

    /// The admitted identity, if any
    #[must_use]
    pub const fn identity(&self) -> Option<&'a Identity> {
        match self {
            Self::Allow(identity) => Some(identity),
            Self::Redirect { .. } => None,
        }
    }
}

/// Admit the session only on an exact role match
#[must_use]
pub fn require_role(session: &Session, role: Role) -> Gate<'_> {
    match session.identity() {
        None => Gate::Redirect {
            to: LOGIN_PATH,
            reason: DenyReason::Unauthenticated,
        },
        Some(identity) if identity.role == role => Gate::Allow(identity),
        Some(identity) => Gate::Redirect {
            to: LOGIN_PATH,
            reason: DenyReason::WrongRole {
                required: role,
                actual: identity.role,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::demo_catalog;

    fn credentials(user_id: &str, password: &str, role: Role) -> Credentials {
        Credentials {
            user_id: user_id.to_string(),
            password: password.to_string(),
            role,
        }
    }

    #[test]
    fn test_demo_login_by_roll_number() {
        let catalog = demo_catalog();
        let auth = DemoAuthenticator::new(&catalog);
        let mut session = Session::new();

        let identity = session
            .login(&auth, &credentials("21cse007", "secret", Role::Student))
            .unwrap();
        assert_eq!(identity.id, "stu-001");
        assert_eq!(identity.name, "Aarav Sharma");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_demo_login_rejects_blank_and_unknown() {
        let catalog = demo_catalog();
        let auth = DemoAuthenticator::new(&catalog);
        let mut session = Session::new();

        assert_eq!(
            session.login(&auth, &credentials("admin", "", Role::Admin)),
            Err(AuthError::EmptyCredentials)
        );
        // a teacher id is not an admin account
        assert!(matches!(
            session.login(&auth, &credentials("tch-001", "pw", Role::Admin)),
            Err(AuthError::UnknownUser { .. })
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_current_identity() {
        let catalog = demo_catalog();
        let auth = DemoAuthenticator::new(&catalog);
        let mut session = Session::new();
        session
            .login(&auth, &credentials("EMP1001", "pw", Role::Teacher))
            .unwrap();

        let _ = session.login(&auth, &credentials("ghost", "pw", Role::Teacher));
        assert_eq!(session.identity().map(|i| i.id.as_str()), Some("tch-001"));
    }

    #[test]
    fn test_gate_without_identity() {
        let session = Session::new();

        for role in Role::ALL {
            assert_eq!(
                require_role(&session, role),
                Gate::Redirect {
                    to: LOGIN_PATH,
                    reason: DenyReason::Unauthenticated
                }
            );
        }
    }

    #[test]
    fn test_gate_exact_role_only() {
        let catalog = demo_catalog();
        let auth = DemoAuthenticator::new(&catalog);
        let mut session = Session::new();
        session
            .login(&auth, &credentials("admin", "pw", Role::Admin))
            .unwrap();

        assert!(require_role(&session, Role::Admin).is_allowed());
        assert_eq!(
            require_role(&session, Role::Student),
            Gate::Redirect {
                to: LOGIN_PATH,
                reason: DenyReason::WrongRole {
                    required: Role::Student,
                    actual: Role::Admin
                }
            }
        );
        assert!(require_role(&session, Role::Teacher).identity().is_none());
    }

    #[test]
    fn test_logout_clears_identity() {
        let catalog = demo_catalog();
        let auth = DemoAuthenticator::new(&catalog);
        let mut session = Session::new();
        session
            .login(&auth, &credentials("registrar", "pw", Role::Admin))
            .unwrap();

        session.logout();
        assert!(!session.is_authenticated());
        assert!(!require_role(&session, Role::Admin).is_allowed());

        // logging out twice is harmless
        session.logout();
        assert!(session.identity().is_none());
    }
}
