//! Authentication endpoints

pub mod dto;
pub mod handlers;

pub use dto::{ChangePasswordRequest, LoginRequest, LoginResponse, UserInfo};
pub use handlers::{change_password, get_current_user, login, AuthHandlerState};
