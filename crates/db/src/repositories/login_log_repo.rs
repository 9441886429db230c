//! Repository for the `login_logs` table.
//!
//! Insert-only apart from the listing queries used by tests and admin
//! tooling; entries are never updated or deleted.

use sqlx::PgPool;

use crate::models::login_log::{CreateLoginLog, LoginLog};

/// Column list for `login_logs` SELECT queries.
const COLUMNS: &str = "id, user_id, login_time, logout_time, ip_address, \
                        user_agent, outcome, failure_reason, duration_secs";

/// Provides insert and query operations for login logs.
pub struct LoginLogRepo;

impl LoginLogRepo {
    /// Insert a new login log entry, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateLoginLog) -> Result<LoginLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO login_logs (user_id, logout_time, ip_address, user_agent, outcome, failure_reason, duration_secs)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LoginLog>(&query)
            .bind(&input.user_id)
            .bind(input.logout_time)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .bind(&input.outcome)
            .bind(&input.failure_reason)
            .bind(input.duration_secs)
            .fetch_one(pool)
            .await
    }

    /// List a user's login log entries, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<LoginLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM login_logs
             WHERE user_id = $1
             ORDER BY login_time DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, LoginLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
