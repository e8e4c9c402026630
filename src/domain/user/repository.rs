//! User repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{User, UserRole};
use crate::domain::DomainResult;

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;
    /// Lookup by username OR email (login accepts either).
    async fn find_by_login(&self, login: &str) -> DomainResult<Option<User>>;
    async fn find_all(&self) -> DomainResult<Vec<User>>;
    async fn count(&self) -> DomainResult<u64>;
    async fn save(&self, user: User) -> DomainResult<User>;
    async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<User>;
    async fn set_password_hash(&self, id: &str, password_hash: String) -> DomainResult<()>;
    async fn set_last_login(&self, id: &str, at: DateTime<Utc>) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
