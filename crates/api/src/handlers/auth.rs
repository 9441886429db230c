//! Handlers for the `/auth` resource (login, logout, check).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use campus_db::models::user::UserProfile;
use serde::{Deserialize, Serialize};

use crate::cookies;
use crate::error::AppResult;
use crate::middleware::client_meta::ClientMeta;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub password: String,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfile,
}

/// Response body for `GET /auth/check`.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Response body for `POST /auth/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with campus id + password. On success the session id and
/// user id are issued as HTTP-only cookies alongside the user profile.
pub async fn login(
    State(state): State<AppState>,
    meta: ClientMeta,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let (session, user) = state.sessions.login(&input.id, &input.password, &meta).await?;

    let max_age_secs = state.config.session_ttl_hours * 3600;
    let [sid, uid] = cookies::session_cookies(&session.session_id, &user.campus_id, max_age_secs);

    Ok((
        AppendHeaders([(SET_COOKIE, sid), (SET_COOKIE, uid)]),
        Json(LoginResponse {
            success: true,
            message: "Login successful".into(),
            user: UserProfile::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Close the current session. The cookies are cleared unconditionally,
/// even when no valid session was found, and calling this twice is not an
/// error.
pub async fn logout(
    State(state): State<AppState>,
    meta: ClientMeta,
    headers: axum::http::HeaderMap,
) -> AppResult<impl IntoResponse> {
    if let Some((session_id, user_id)) = cookies::session_pair(&headers) {
        state.sessions.logout(&session_id, &user_id, &meta).await?;
    }

    let [sid, uid] = cookies::clear_session_cookies();
    Ok((
        AppendHeaders([(SET_COOKIE, sid), (SET_COOKIE, uid)]),
        Json(LogoutResponse {
            success: true,
            message: "Logout successful".into(),
        }),
    ))
}

/// GET /api/v1/auth/check
///
/// Validate the session cookies and return the current user profile.
/// Refreshes the session's last-activity timestamp as a side effect.
pub async fn check(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> AppResult<Json<CheckResponse>> {
    let (session_id, user_id) = cookies::session_pair(&headers).ok_or_else(|| {
        campus_core::error::CoreError::Unauthorized("Not logged in".into())
    })?;

    let user = state.sessions.validate(&session_id, &user_id).await?;

    Ok(Json(CheckResponse {
        success: true,
        user: UserProfile::from(&user),
    }))
}
