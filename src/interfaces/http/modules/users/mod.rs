//! User management endpoints

pub mod dto;
pub mod handlers;

pub use dto::{CreateUserRequest, ModulePermission, RolePermissions, UpdateUserRequest, UserDto};
pub use handlers::{
    create_user, delete_user, get_user, list_roles, list_users, update_user, UserHandlerState,
};
