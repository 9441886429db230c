//! Repository for the `notifications` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, kind, title, content, is_read, priority, \
                        created_at, read_at, expires_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Create a notification for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, kind, title, content, priority, expires_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(&input.user_id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.priority)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// List a page of a user's notifications, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of notifications for a user.
    pub async fn count_for_user(pool: &PgPool, user_id: &str) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// Number of unread notifications for a user, independent of any page
    /// window.
    pub async fn unread_count(pool: &PgPool, user_id: &str) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }

    /// Mark a single notification as read, scoped to `(id, user_id)`.
    ///
    /// Returns the updated row, or `None` when no notification matches
    /// both the id and the owning user -- a user can never mark another
    /// user's notification. The transition is monotonic: `read_at` keeps
    /// its first value if the notification was already read.
    pub async fn mark_read(
        pool: &PgPool,
        notification_id: DbId,
        user_id: &str,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications
             SET is_read = true, read_at = COALESCE(read_at, NOW())
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(notification_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
