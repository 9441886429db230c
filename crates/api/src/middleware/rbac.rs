//! Role-based access control extractors.
//!
//! Each extractor wraps [`Identity`] and rejects requests whose role does
//! not meet the requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campus_core::identity::IdentityContext;
use campus_core::roles::Role;

use super::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(ctx): RequireAdmin) -> AppResult<Json<()>> {
///     // ctx is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub IdentityContext);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Identity(ctx) = Identity::from_request_parts(parts, state).await?;
        ctx.require_role(&[Role::Admin])?;
        Ok(RequireAdmin(ctx))
    }
}

/// Requires `teacher` or `admin` role. Rejects with 403 Forbidden otherwise.
pub struct RequireStaff(pub IdentityContext);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Identity(ctx) = Identity::from_request_parts(parts, state).await?;
        ctx.require_role(&[Role::Teacher, Role::Admin])?;
        Ok(RequireStaff(ctx))
    }
}
