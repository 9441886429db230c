//! Notification entity models and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// The only permitted mutation is the monotonic unread -> read transition,
/// which also stamps `read_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    /// Campus id of the owning user.
    pub user_id: String,
    /// `course`, `grade`, `library`, `dormitory`, `system`, or `announcement`.
    pub kind: String,
    pub title: String,
    pub content: String,
    pub is_read: bool,
    /// `low`, `medium`, `high`, or `urgent`.
    pub priority: String,
    pub created_at: Timestamp,
    pub read_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
}

/// DTO for creating a notification.
#[derive(Debug, Deserialize)]
pub struct CreateNotification {
    pub user_id: String,
    pub kind: String,
    pub title: String,
    pub content: String,
    pub priority: String,
    pub expires_at: Option<Timestamp>,
}
