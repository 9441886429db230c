//! Authenticated identity shared by every handler.
//!
//! Two mutually exclusive sources can populate an [`IdentityContext`]: a
//! validated server-side session, or pre-verified identity headers injected
//! by the upstream reverse proxy. Handlers never care which one it was;
//! they receive the same uniform context either way.

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::Role;

/// Request header carrying the authenticated user id, set by the upstream
/// proxy after it has performed authentication.
pub const HEADER_USER_ID: &str = "x-user-id";
/// Request header carrying the authenticated user's role.
pub const HEADER_USER_ROLE: &str = "x-user-role";
/// Request header carrying the authenticated user's display name.
pub const HEADER_USER_NAME: &str = "x-user-name";
/// Request header carrying the authenticated user's email.
pub const HEADER_USER_EMAIL: &str = "x-user-email";

/// Where an [`IdentityContext`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// Resolved from a session cookie via the session store.
    Session,
    /// Extracted from proxy-injected `x-user-*` headers, trusted without
    /// further verification.
    TrustedHeaders,
}

/// The authenticated identity attached to a request.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityContext {
    /// Campus user id (student/staff number).
    pub user_id: String,
    pub role: Role,
    pub display_name: String,
    pub email: String,
    #[serde(skip)]
    pub source: IdentitySource,
}

impl IdentityContext {
    /// Fail with `Forbidden` unless this identity's role is in `allowed`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), CoreError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(CoreError::Forbidden(format!(
                "Role '{}' is not permitted for this operation",
                self.role
            )))
        }
    }
}
