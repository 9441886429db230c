//! Login log entity model and DTOs.
//!
//! Login logs are immutable once written: one entry per login attempt and
//! one additional entry per logout. They have no `updated_at`.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single login log entry.
///
/// `user_id` may reference a nonexistent user for failed attempts against
/// unknown ids; the trail records what the caller claimed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LoginLog {
    pub id: DbId,
    pub user_id: String,
    pub login_time: Timestamp,
    pub logout_time: Option<Timestamp>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    /// `success`, `failed`, or `logout`.
    pub outcome: String,
    /// Populated only for failed attempts; never returned to clients.
    pub failure_reason: Option<String>,
    /// Session duration in seconds, populated on logout entries.
    pub duration_secs: Option<i64>,
}

/// DTO for inserting a new login log entry.
#[derive(Debug, Clone)]
pub struct CreateLoginLog {
    pub user_id: String,
    pub logout_time: Option<Timestamp>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub outcome: String,
    pub failure_reason: Option<String>,
    pub duration_secs: Option<i64>,
}
