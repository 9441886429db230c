//! User session model and DTOs.

use campus_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A user session row from the `user_sessions` table.
///
/// A session is valid iff `is_active` AND `expires_at` is in the future.
/// `expires_at` is fixed at creation and never extended; only
/// `last_activity_at` is refreshed on validation.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    /// Opaque, cryptographically random session identifier (UUIDv4).
    pub session_id: String,
    /// Campus id of the owning user.
    pub user_id: String,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: Timestamp,
    pub last_activity_at: Timestamp,
    pub expires_at: Timestamp,
    pub is_active: bool,
}

/// DTO for creating a new user session.
pub struct CreateSession {
    pub session_id: String,
    pub user_id: String,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub expires_at: Timestamp,
}
