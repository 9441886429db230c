//! Operation log entity model and DTOs.
//!
//! Append-only audit trail of user operations. Never consulted for
//! authorization decisions.

use campus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single operation log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OperationLog {
    pub id: DbId,
    pub user_id: String,
    pub module: String,
    pub action: String,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub request_json: Option<serde_json::Value>,
    pub response_status: Option<i32>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new operation log entry.
#[derive(Debug, Clone)]
pub struct CreateOperationLog {
    pub user_id: String,
    pub module: String,
    pub action: String,
    pub description: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub request_json: Option<serde_json::Value>,
    pub response_status: Option<i32>,
}
