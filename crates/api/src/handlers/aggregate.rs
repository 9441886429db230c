//! Handlers for the `/aggregate` resource.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::gateway::AggregatedSummary;
use crate::middleware::identity::Identity;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/aggregate/summary
///
/// Fan out to the business and analytics backends concurrently and merge
/// the outcomes. The top-level `success` reflects only that the
/// orchestration ran; each branch carries its own success flag, payload,
/// and error. One failed branch never fails the request.
pub async fn summary(
    Identity(identity): Identity,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<AggregatedSummary>>> {
    let summary = state.gateway.summary(&identity).await;
    Ok(Json(ApiResponse::data(summary)))
}
