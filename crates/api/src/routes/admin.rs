//! Route definitions for the `/admin` resource.
//!
//! All endpoints require the `admin` role.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /audit/logins     -> login_logs
/// GET /audit/operations -> operation_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/audit/logins", get(admin::login_logs))
        .route("/audit/operations", get(admin::operation_logs))
}
