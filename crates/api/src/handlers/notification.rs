//! Handlers for the `/notifications` resource.
//!
//! All endpoints require an authenticated identity (either source) and
//! operate only on the caller's own notifications.

use axum::extract::{Path, Query, State};
use axum::Json;
use campus_core::audit::{actions, modules};
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::notification::Notification;
use campus_db::models::operation_log::CreateOperationLog;
use campus_db::repositories::NotificationRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::client_meta::ClientMeta;
use crate::middleware::identity::Identity;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// 1-based page number. Defaults to 1.
    pub page: Option<i64>,
    /// Page size. Defaults to 10, capped at 100.
    pub limit: Option<i64>,
}

/// Pagination envelope for the notification listing.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// Payload of `GET /notifications`.
#[derive(Debug, Serialize)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub pagination: Pagination,
    /// Unread count over ALL of the user's notifications, independent of
    /// the page window.
    #[serde(rename = "unreadCount")]
    pub unread_count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications
///
/// List the caller's notifications, newest first.
pub async fn list(
    Identity(identity): Identity,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<ApiResponse<NotificationPage>>> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = (page - 1) * limit;

    let notifications =
        NotificationRepo::list_for_user(&state.pool, &identity.user_id, limit, offset).await?;
    let total = NotificationRepo::count_for_user(&state.pool, &identity.user_id).await?;
    let unread_count = NotificationRepo::unread_count(&state.pool, &identity.user_id).await?;

    let pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

    Ok(Json(ApiResponse::data(NotificationPage {
        notifications,
        pagination: Pagination {
            page,
            limit,
            total,
            pages,
        },
        unread_count,
    })))
}

/// PUT /api/v1/notifications/{id}/read
///
/// Mark one of the caller's notifications as read. Returns 404 when the
/// notification does not exist or belongs to another user -- the two
/// cases are indistinguishable by design.
pub async fn mark_read(
    Identity(identity): Identity,
    State(state): State<AppState>,
    meta: ClientMeta,
    Path(notification_id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let notification = NotificationRepo::mark_read(&state.pool, notification_id, &identity.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id: notification_id,
        }))?;

    state.audit.record_operation(CreateOperationLog {
        user_id: identity.user_id.clone(),
        module: modules::NOTIFICATION.into(),
        action: actions::MARK_READ.into(),
        description: format!("Marked notification {notification_id} as read"),
        ip_address: meta.ip_address,
        user_agent: meta.user_agent,
        request_json: None,
        response_status: None,
    });

    Ok(Json(ApiResponse::data(notification)))
}
