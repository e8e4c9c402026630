//! User management and credential verification

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::user::{User, UserPatch, UserRole};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::notifications::{ChangeAction, EntityKind, Event, SharedEventBus};

/// Service for user accounts
pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.repos.users().find_all().await
    }

    pub async fn get(&self, id: &str) -> DomainResult<Option<User>> {
        self.repos.users().find_by_id(id).await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        if username.len() < 3 || username.len() > 50 {
            return Err(DomainError::Validation(
                "username must be 3-50 characters".to_string(),
            ));
        }
        if password.len() < 8 {
            return Err(DomainError::Validation(
                "password must be at least 8 characters".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::Validation("invalid email address".to_string()));
        }

        if self.repos.users().find_by_login(username).await?.is_some()
            || self.repos.users().find_by_login(email).await?.is_some()
        {
            return Err(DomainError::Conflict(
                "username or email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Validation(format!("failed to hash password: {}", e)))?;

        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };

        let saved = self.repos.users().save(user).await?;

        info!(user_id = %saved.id, username = %saved.username, "User registered");
        self.event_bus.publish(Event::data_changed(
            EntityKind::Users,
            ChangeAction::Created,
            Some(saved.id.clone()),
        ));

        Ok(saved)
    }

    /// Verify credentials for login. Accepts username or email; stamps
    /// `last_login_at` on success.
    pub async fn authenticate(&self, login: &str, password: &str) -> DomainResult<User> {
        let user = self
            .repos
            .users()
            .find_by_login(login)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("invalid credentials".to_string()))?;

        if !user.is_active {
            return Err(DomainError::Unauthorized("account is disabled".to_string()));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("invalid credentials".to_string()));
        }

        // Best effort; a failed stamp must not fail the login
        let _ = self.repos.users().set_last_login(&user.id, Utc::now()).await;

        Ok(user)
    }

    pub async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<User> {
        let updated = self.repos.users().update(id, patch).await?;

        self.event_bus.publish(Event::data_changed(
            EntityKind::Users,
            ChangeAction::Updated,
            Some(id.to_string()),
        ));

        Ok(updated)
    }

    pub async fn change_password(
        &self,
        id: &str,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if new_password.len() < 8 {
            return Err(DomainError::Validation(
                "password must be at least 8 characters".to_string(),
            ));
        }

        let user = self
            .repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            })?;

        let valid = verify_password(current_password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized(
                "current password is incorrect".to_string(),
            ));
        }

        let hash = hash_password(new_password)
            .map_err(|e| DomainError::Validation(format!("failed to hash password: {}", e)))?;
        self.repos.users().set_password_hash(id, hash).await?;

        info!(user_id = id, "Password changed");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repos.users().delete(id).await?;

        info!(user_id = id, "User deleted");
        self.event_bus.publish(Event::data_changed(
            EntityKind::Users,
            ChangeAction::Deleted,
            Some(id.to_string()),
        ));

        Ok(())
    }
}
