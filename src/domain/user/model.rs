//! User domain entity

use chrono::{DateTime, Utc};

/// User role within the committee administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Secretary,
    Operator,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Operator
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Secretary => "secretary",
            Self::Operator => "operator",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a role string, defaulting to the least-privileged role.
pub fn str_to_role(s: &str) -> UserRole {
    match s {
        "admin" => UserRole::Admin,
        "secretary" => UserRole::Secretary,
        _ => UserRole::Operator,
    }
}

/// An administrative user of the system.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}
