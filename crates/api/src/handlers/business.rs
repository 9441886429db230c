//! Handlers for the `/business` resource: single-branch passthrough calls
//! to the business backend.
//!
//! Each handler forwards the caller's identity as call metadata and maps
//! an upstream failure to a typed 502 with the upstream's message
//! preserved. Record mutations are recorded in the operation log.

use axum::extract::{Path, Query, State};
use axum::Json;
use campus_core::audit::{actions, modules};
use campus_core::identity::IdentityContext;
use campus_core::types::DbId;
use campus_db::models::operation_log::CreateOperationLog;
use campus_upstream::business::{CourseQuery, GradeQuery, RecordQuery};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::client_meta::ClientMeta;
use crate::middleware::identity::Identity;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /business/courses`.
#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub course_type: Option<String>,
    pub semester: Option<String>,
    pub search: Option<String>,
}

/// Query parameters for `GET /business/grades`.
#[derive(Debug, Deserialize)]
pub struct GradeListQuery {
    pub semester: Option<String>,
    pub year: Option<i32>,
}

/// Query parameters for `GET /business/records`.
#[derive(Debug, Deserialize)]
pub struct RecordListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/business/courses
pub async fn courses(
    Identity(identity): Identity,
    State(state): State<AppState>,
    Query(params): Query<CourseListQuery>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let query = CourseQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).clamp(1, 100),
        course_type: params.course_type,
        semester: params.semester,
        search: params.search,
    };
    let data = state.gateway.business().get_courses(&identity, &query).await?;
    Ok(Json(ApiResponse::data(data)))
}

/// GET /api/v1/business/grades
pub async fn grades(
    Identity(identity): Identity,
    State(state): State<AppState>,
    Query(params): Query<GradeListQuery>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let query = GradeQuery {
        semester: params.semester,
        year: params.year,
    };
    let data = state.gateway.business().get_grades(&identity, &query).await?;
    Ok(Json(ApiResponse::data(data)))
}

/// GET /api/v1/business/records
pub async fn list_records(
    Identity(identity): Identity,
    State(state): State<AppState>,
    Query(params): Query<RecordListQuery>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let query = RecordQuery {
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).clamp(1, 100),
        category: params.category,
        status: params.status,
    };
    let data = state.gateway.business().list_records(&identity, &query).await?;
    Ok(Json(ApiResponse::data(data)))
}

/// POST /api/v1/business/records
pub async fn create_record(
    Identity(identity): Identity,
    State(state): State<AppState>,
    meta: ClientMeta,
    Json(record): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let data = state.gateway.business().create_record(&identity, &record).await?;
    log_record_op(&state, &identity, &meta, actions::CREATE_RECORD, "Created business record", Some(record));
    Ok(Json(ApiResponse::with_message(data, "Record created")))
}

/// PUT /api/v1/business/records/{id}
pub async fn update_record(
    Identity(identity): Identity,
    State(state): State<AppState>,
    meta: ClientMeta,
    Path(record_id): Path<DbId>,
    Json(record): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let data = state
        .gateway
        .business()
        .update_record(&identity, record_id, &record)
        .await?;
    log_record_op(
        &state,
        &identity,
        &meta,
        actions::UPDATE_RECORD,
        &format!("Updated business record {record_id}"),
        Some(record),
    );
    Ok(Json(ApiResponse::with_message(data, "Record updated")))
}

/// DELETE /api/v1/business/records/{id}
pub async fn delete_record(
    Identity(identity): Identity,
    State(state): State<AppState>,
    meta: ClientMeta,
    Path(record_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let data = state.gateway.business().delete_record(&identity, record_id).await?;
    log_record_op(
        &state,
        &identity,
        &meta,
        actions::DELETE_RECORD,
        &format!("Deleted business record {record_id}"),
        None,
    );
    Ok(Json(ApiResponse::with_message(data, "Record deleted")))
}

/// Queue an operation log entry for a record mutation.
fn log_record_op(
    state: &AppState,
    identity: &IdentityContext,
    meta: &ClientMeta,
    action: &str,
    description: &str,
    request_json: Option<serde_json::Value>,
) {
    state.audit.record_operation(CreateOperationLog {
        user_id: identity.user_id.clone(),
        module: modules::BUSINESS.into(),
        action: action.into(),
        description: description.into(),
        ip_address: meta.ip_address.clone(),
        user_agent: meta.user_agent.clone(),
        request_json,
        response_status: None,
    });
}
