//! User roles and account statuses.
//!
//! Both sets are closed: they must match the CHECK constraints in the
//! `users` table migration.

use serde::{Deserialize, Serialize};

/// Well-known role name constants, used where a `&str` is required
/// (e.g. trusted identity headers).
pub const ROLE_STUDENT: &str = "student";
pub const ROLE_TEACHER: &str = "teacher";
pub const ROLE_ADMIN: &str = "admin";

/// A campus user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Parse a role from its wire/storage name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ROLE_STUDENT => Some(Role::Student),
            ROLE_TEACHER => Some(Role::Teacher),
            ROLE_ADMIN => Some(Role::Admin),
            _ => None,
        }
    }

    /// The canonical storage/wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => ROLE_STUDENT,
            Role::Teacher => ROLE_TEACHER,
            Role::Admin => ROLE_ADMIN,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account status. Only `Active` users may authenticate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Graduated,
    Suspended,
}

impl UserStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            "graduated" => Some(UserStatus::Graduated),
            "suspended" => Some(UserStatus::Suspended),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Graduated => "graduated",
            UserStatus::Suspended => "suspended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_name() {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn status_round_trips_through_name() {
        for status in [
            UserStatus::Active,
            UserStatus::Inactive,
            UserStatus::Graduated,
            UserStatus::Suspended,
        ] {
            assert_eq!(UserStatus::parse(status.as_str()), Some(status));
        }
    }
}
