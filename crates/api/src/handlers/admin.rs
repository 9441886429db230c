//! Handlers for the `/admin` resource: audit trail queries.
//!
//! Admin only. These are read-only views over the append-only logs; the
//! trail itself is never used for authorization decisions.

use axum::extract::{Query, State};
use axum::Json;
use campus_db::models::login_log::LoginLog;
use campus_db::models::operation_log::OperationLog;
use campus_db::repositories::{LoginLogRepo, OperationLogRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Default number of audit entries returned.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum number of audit entries returned.
const MAX_LIMIT: i64 = 500;

/// Query parameters for the audit listing endpoints.
#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub user_id: String,
    pub limit: Option<i64>,
}

/// GET /api/v1/admin/audit/logins
///
/// List a user's login trail, newest first.
pub async fn login_logs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> AppResult<Json<ApiResponse<Vec<LoginLog>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let logs = LoginLogRepo::list_for_user(&state.pool, &params.user_id, limit).await?;
    Ok(Json(ApiResponse::data(logs)))
}

/// GET /api/v1/admin/audit/operations
///
/// List a user's operation trail, newest first.
pub async fn operation_logs(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AuditQuery>,
) -> AppResult<Json<ApiResponse<Vec<OperationLog>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let logs = OperationLogRepo::list_for_user(&state.pool, &params.user_id, limit).await?;
    Ok(Json(ApiResponse::data(logs)))
}
