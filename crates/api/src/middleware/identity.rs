//! The trust boundary adapter: resolve an authenticated identity from
//! either identity source.
//!
//! Use [`Identity`] as an extractor parameter in any handler that requires
//! authentication:
//!
//! ```ignore
//! async fn my_handler(Identity(ctx): Identity) -> AppResult<Json<()>> {
//!     tracing::info!(user_id = %ctx.user_id, role = %ctx.role, "handling request");
//!     Ok(Json(()))
//! }
//! ```
//!
//! Two mutually exclusive sources are checked in order:
//!
//! 1. Pre-verified `x-user-*` headers injected by the upstream reverse
//!    proxy. The proxy has already authenticated the caller, so the
//!    headers are trusted completely -- no signature check, no session
//!    store lookup. This is an explicit, administratively configured
//!    trust boundary.
//! 2. The session cookie pair, resolved through the session manager
//!    (which re-checks expiry, revocation, and account status).
//!
//! A request carrying neither yields 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use campus_core::error::CoreError;
use campus_core::identity::{
    IdentityContext, IdentitySource, HEADER_USER_EMAIL, HEADER_USER_ID, HEADER_USER_NAME,
    HEADER_USER_ROLE,
};
use campus_core::roles::Role;

use crate::cookies;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated identity extracted from trusted headers or a session.
#[derive(Debug, Clone)]
pub struct Identity(pub IdentityContext);

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(context) = from_trusted_headers(&parts.headers) {
            return Ok(Identity(context));
        }

        if let Some((session_id, user_id)) = cookies::session_pair(&parts.headers) {
            let user = state.sessions.validate(&session_id, &user_id).await?;
            let role = Role::parse(&user.role).ok_or_else(|| {
                // The role column is CHECK-constrained; an unknown value
                // means the store and the code disagree.
                AppError::Core(CoreError::Internal(format!(
                    "Unknown role '{}' for user {}",
                    user.role, user.campus_id
                )))
            })?;
            return Ok(Identity(IdentityContext {
                user_id: user.campus_id,
                role,
                display_name: user.display_name,
                email: user.email,
                source: IdentitySource::Session,
            }));
        }

        Err(AppError::Core(CoreError::Unauthorized(
            "Authentication required".into(),
        )))
    }
}

/// Build an identity from proxy-injected headers, if present.
///
/// Only `x-user-id` is required. The role falls back to `student` (the
/// least-privileged role) when the header is absent or unknown; name and
/// email fall back to empty strings, mirroring what the proxy sends for
/// accounts without them.
fn from_trusted_headers(headers: &HeaderMap) -> Option<IdentityContext> {
    let user_id = header_str(headers, HEADER_USER_ID)?;
    if user_id.is_empty() {
        return None;
    }

    let role = header_str(headers, HEADER_USER_ROLE)
        .and_then(|r| Role::parse(&r))
        .unwrap_or(Role::Student);

    Some(IdentityContext {
        user_id,
        role,
        display_name: header_str(headers, HEADER_USER_NAME).unwrap_or_default(),
        email: header_str(headers, HEADER_USER_EMAIL).unwrap_or_default(),
        source: IdentitySource::TrustedHeaders,
    })
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
