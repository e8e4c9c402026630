//! Member service for registry operations

use std::sync::Arc;

use tracing::info;

use crate::domain::member::{Member, MemberPatch, MemberStatus, NewMember};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::{ChangeAction, EntityKind, Event, SharedEventBus};

/// Service for member (socio) registry operations
pub struct MemberService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
}

impl MemberService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus) -> Self {
        Self { repos, event_bus }
    }

    pub async fn list(&self) -> DomainResult<Vec<Member>> {
        self.repos.members().find_all().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Option<Member>> {
        self.repos.members().find_by_id(id).await
    }

    pub async fn create(&self, member: NewMember) -> DomainResult<Member> {
        if self
            .repos
            .members()
            .find_by_rut(&member.rut)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(format!(
                "member with RUT {} already exists",
                member.rut
            )));
        }

        let saved = self.repos.members().save(member).await?;

        info!(member_id = saved.id, rut = %saved.rut, "Member created");
        self.event_bus.publish(Event::data_changed(
            EntityKind::Members,
            ChangeAction::Created,
            Some(saved.id.to_string()),
        ));

        Ok(saved)
    }

    pub async fn update(&self, id: i32, patch: MemberPatch) -> DomainResult<Member> {
        let updated = self.repos.members().update(id, patch).await?;

        self.event_bus.publish(Event::data_changed(
            EntityKind::Members,
            ChangeAction::Updated,
            Some(id.to_string()),
        ));

        Ok(updated)
    }

    /// Explicit status transition. Member status is an administrative
    /// decision, never derived from invoice status.
    pub async fn set_status(&self, id: i32, status: MemberStatus) -> DomainResult<Member> {
        let updated = self
            .repos
            .members()
            .update(
                id,
                MemberPatch {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await?;

        info!(member_id = id, status = %status, "Member status changed");
        self.event_bus.publish(Event::data_changed(
            EntityKind::Members,
            ChangeAction::StatusChanged,
            Some(id.to_string()),
        ));

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repos.members().delete(id).await?;

        info!(member_id = id, "Member deleted");
        self.event_bus.publish(Event::data_changed(
            EntityKind::Members,
            ChangeAction::Deleted,
            Some(id.to_string()),
        ));

        Ok(())
    }
}
