//! Handlers for the `/analytics` resource: single-branch passthrough calls
//! to the analytics backend.

use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::identity::Identity;
use crate::middleware::rbac::RequireStaff;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/analytics/dashboard
///
/// Fetch the caller's analytics dashboard. Query parameters are forwarded
/// verbatim.
pub async fn dashboard(
    Identity(identity): Identity,
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let data = state.gateway.analytics().dashboard(&identity, &params).await?;
    Ok(Json(ApiResponse::data(data)))
}

/// POST /api/v1/analytics/query
///
/// Run an ad-hoc analytics query. Staff only; the request body is
/// forwarded verbatim.
pub async fn query(
    RequireStaff(identity): RequireStaff,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let data = state.gateway.analytics().query(&identity, &body).await?;
    Ok(Json(ApiResponse::data(data)))
}
