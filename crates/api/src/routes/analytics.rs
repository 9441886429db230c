//! Route definitions for the `/analytics` resource (passthrough calls to
//! the analytics backend).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// GET  /dashboard -> dashboard
/// POST /query     -> query (staff only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(analytics::dashboard))
        .route("/query", post(analytics::query))
}
