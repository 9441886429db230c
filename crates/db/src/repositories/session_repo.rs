//! Repository for the `user_sessions` table.

use sqlx::PgPool;

use crate::models::session::{CreateSession, UserSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, user_id, user_agent, ip_address, \
                        created_at, last_activity_at, expires_at, is_active";

/// Provides CRUD operations for user sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (session_id, user_id, user_agent, ip_address, expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(&input.session_id)
            .bind(&input.user_id)
            .bind(&input.user_agent)
            .bind(&input.ip_address)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a currently valid session for the given `(session_id, user_id)`.
    ///
    /// Both inactivation routes are checked here: the explicit revoke flag
    /// and passive time-based expiry.
    pub async fn find_valid(
        pool: &PgPool,
        session_id: &str,
        user_id: &str,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_sessions
             WHERE session_id = $1
               AND user_id = $2
               AND is_active = true
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(session_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a session by id and owner regardless of validity.
    ///
    /// Used by logout, which needs the creation time of an
    /// already-expiring session to compute its duration.
    pub async fn find(
        pool: &PgPool,
        session_id: &str,
        user_id: &str,
    ) -> Result<Option<UserSession>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_sessions WHERE session_id = $1 AND user_id = $2");
        sqlx::query_as::<_, UserSession>(&query)
            .bind(session_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Refresh a session's last-activity timestamp. Expiry is never
    /// extended.
    pub async fn touch_activity(pool: &PgPool, session_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE user_sessions SET last_activity_at = NOW() WHERE session_id = $1")
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    ///
    /// Revoking an already inactive session is a no-op, which makes
    /// logout idempotent.
    pub async fn revoke(pool: &PgPool, session_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET is_active = false WHERE session_id = $1 AND is_active = true",
        )
        .bind(session_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions past their expiration timestamp, regardless of the
    /// active flag (TTL semantics). Returns the count of deleted rows.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE expires_at < NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
