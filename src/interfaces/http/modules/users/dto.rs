//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{User, UserRole};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            role: u.role.as_str().to_string(),
            is_active: u.is_active,
            created_at: u.created_at,
            updated_at: u.updated_at,
            last_login_at: u.last_login_at,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50, message = "username must be 3-50 characters"))]
    pub username: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// One of: admin, secretary, operator
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "operator".to_string()
}

/// Update user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Access level of a role in one module (read-only display; the API does
/// not enforce these)
#[derive(Debug, Serialize, ToSchema)]
pub struct ModulePermission {
    pub module: &'static str,
    /// "full" | "write" | "read" | "none"
    pub access: &'static str,
}

/// Permission matrix of one role
#[derive(Debug, Serialize, ToSchema)]
pub struct RolePermissions {
    pub role: &'static str,
    pub permissions: Vec<ModulePermission>,
}

/// Static permission matrix shown in the Users page. Display only.
pub fn permission_matrix() -> Vec<RolePermissions> {
    fn perms(
        members: &'static str,
        readings: &'static str,
        billing: &'static str,
        tariffs: &'static str,
        users: &'static str,
    ) -> Vec<ModulePermission> {
        vec![
            ModulePermission {
                module: "members",
                access: members,
            },
            ModulePermission {
                module: "readings",
                access: readings,
            },
            ModulePermission {
                module: "billing",
                access: billing,
            },
            ModulePermission {
                module: "tariffs",
                access: tariffs,
            },
            ModulePermission {
                module: "users",
                access: users,
            },
        ]
    }

    vec![
        RolePermissions {
            role: UserRole::Admin.as_str(),
            permissions: perms("full", "full", "full", "full", "full"),
        },
        RolePermissions {
            role: UserRole::Secretary.as_str(),
            permissions: perms("write", "read", "write", "read", "none"),
        },
        RolePermissions {
            role: UserRole::Operator.as_str(),
            permissions: perms("read", "write", "read", "none", "none"),
        },
    ]
}
