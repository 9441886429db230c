//! Entity models and DTOs, one module per table.

pub mod login_log;
pub mod notification;
pub mod operation_log;
pub mod session;
pub mod user;
