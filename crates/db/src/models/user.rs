//! User entity model and DTOs.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    /// Human-chosen campus identifier (student/staff number), unique.
    pub campus_id: String,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    /// Role name: `student`, `teacher`, or `admin`.
    pub role: String,
    /// Account status: `active`, `inactive`, `graduated`, or `suspended`.
    pub status: String,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        UserProfile {
            id: user.campus_id.clone(),
            name: user.display_name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub campus_id: String,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
}
