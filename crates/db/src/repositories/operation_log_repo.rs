//! Repository for the `operation_logs` table.

use sqlx::PgPool;

use crate::models::operation_log::{CreateOperationLog, OperationLog};

/// Column list for `operation_logs` SELECT queries.
const COLUMNS: &str = "id, user_id, module, action, description, ip_address, \
                        user_agent, request_json, response_status, created_at";

/// Provides insert and query operations for operation logs.
pub struct OperationLogRepo;

impl OperationLogRepo {
    /// Insert a new operation log entry, returning the created row.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateOperationLog,
    ) -> Result<OperationLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO operation_logs (user_id, module, action, description, ip_address, user_agent, request_json, response_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OperationLog>(&query)
            .bind(&input.user_id)
            .bind(&input.module)
            .bind(&input.action)
            .bind(&input.description)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .bind(&input.request_json)
            .bind(input.response_status)
            .fetch_one(pool)
            .await
    }

    /// List a user's operation log entries, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<OperationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM operation_logs
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, OperationLog>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
