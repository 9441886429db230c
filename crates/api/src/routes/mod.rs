pub mod admin;
pub mod aggregate;
pub mod analytics;
pub mod auth;
pub mod business;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                        login (public)
/// /auth/logout                       logout (session cookie)
/// /auth/check                        session check (session cookie)
///
/// /notifications                     list (trusted identity)
/// /notifications/{id}/read           mark read (trusted identity)
///
/// /aggregate/summary                 business + analytics fan-out
///
/// /business/courses                  course list passthrough
/// /business/grades                   grade list passthrough
/// /business/records                  record list / create
/// /business/records/{id}             record update / delete
///
/// /analytics/dashboard               dashboard passthrough
/// /analytics/query                   query passthrough (staff only)
///
/// /admin/audit/logins                login trail (admin only)
/// /admin/audit/operations            operation trail (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/notifications", notification::router())
        .nest("/aggregate", aggregate::router())
        .nest("/business", business::router())
        .nest("/analytics", analytics::router())
        .nest("/admin", admin::router())
}
