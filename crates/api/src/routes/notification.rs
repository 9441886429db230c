//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require an authenticated identity.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET /            -> list
/// PUT /{id}/read   -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list))
        .route("/{id}/read", put(notification::mark_read))
}
