//! Route definitions for the `/aggregate` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::aggregate;
use crate::state::AppState;

/// Routes mounted at `/aggregate`.
///
/// ```text
/// GET /summary -> summary (concurrent business + analytics fan-out)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/summary", get(aggregate::summary))
}
