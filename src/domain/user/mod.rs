//! User aggregate

pub mod model;
pub mod repository;

pub use model::{str_to_role, User, UserRole};
pub use repository::{UserPatch, UserRepository};
