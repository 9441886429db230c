//! Repository unit-structs, one per table.
//!
//! Each repository exposes associated async functions over a `&PgPool`.
//! Ownership-scoped mutations (e.g. marking a notification read) always
//! constrain on the owning user id in SQL, never in application code.

mod login_log_repo;
mod notification_repo;
mod operation_log_repo;
mod session_repo;
mod user_repo;

pub use login_log_repo::LoginLogRepo;
pub use notification_repo::NotificationRepo;
pub use operation_log_repo::OperationLogRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
