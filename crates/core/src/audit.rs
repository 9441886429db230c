//! Audit logging constants and enums.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and the API server's audit writer.

use serde::{Deserialize, Serialize};

/// Known module names for operation log entries.
pub mod modules {
    pub const AUTHENTICATION: &str = "authentication";
    pub const NOTIFICATION: &str = "notification";
    pub const BUSINESS: &str = "business";
}

/// Known action names for operation log entries.
pub mod actions {
    pub const LOGIN: &str = "login";
    pub const LOGOUT: &str = "logout";
    pub const MARK_READ: &str = "mark_read";
    pub const CREATE_RECORD: &str = "create_record";
    pub const UPDATE_RECORD: &str = "update_record";
    pub const DELETE_RECORD: &str = "delete_record";
}

/// Outcome of a login attempt, stored in `login_logs.outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginOutcome {
    Success,
    Failed,
    Logout,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "success",
            LoginOutcome::Failed => "failed",
            LoginOutcome::Logout => "logout",
        }
    }
}

/// Why a login attempt failed. Stored server-side only; never returned to
/// the client beyond a generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    MissingCredentials,
    UserNotFound,
    InvalidPassword,
    SystemError,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::MissingCredentials => "missing_credentials",
            FailureReason::UserNotFound => "user_not_found",
            FailureReason::InvalidPassword => "invalid_password",
            FailureReason::SystemError => "system_error",
        }
    }
}
