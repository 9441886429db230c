//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, campus_id, display_name, email, password_hash, \
                        role, status, last_login_at, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (campus_id, display_name, email, password_hash, role, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.campus_id)
            .bind(&input.display_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a user by campus id, regardless of status.
    ///
    /// Status checks belong to the caller: the session manager needs to
    /// distinguish "unknown user" from "known but not active" for audit
    /// purposes.
    pub async fn find_by_campus_id(
        pool: &PgPool,
        campus_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE campus_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(campus_id)
            .fetch_optional(pool)
            .await
    }

    /// Stamp a successful login.
    pub async fn record_login(pool: &PgPool, campus_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW(), updated_at = NOW() WHERE campus_id = $1")
            .bind(campus_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Change a user's account status. Returns `true` if a row was updated.
    pub async fn set_status(
        pool: &PgPool,
        campus_id: &str,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET status = $2, updated_at = NOW() WHERE campus_id = $1")
                .bind(campus_id)
                .bind(status)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
