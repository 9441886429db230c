//! Route definitions for the `/business` resource (passthrough calls to
//! the business backend).

use axum::routing::get;
use axum::Router;

use crate::handlers::business;
use crate::state::AppState;

/// Routes mounted at `/business`.
///
/// ```text
/// GET    /courses        -> courses
/// GET    /grades         -> grades
/// GET    /records        -> list_records
/// POST   /records        -> create_record
/// PUT    /records/{id}   -> update_record
/// DELETE /records/{id}   -> delete_record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(business::courses))
        .route("/grades", get(business::grades))
        .route(
            "/records",
            get(business::list_records).post(business::create_record),
        )
        .route(
            "/records/{id}",
            axum::routing::put(business::update_record).delete(business::delete_record),
        )
}
