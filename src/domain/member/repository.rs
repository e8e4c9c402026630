//! Member repository interface

use async_trait::async_trait;

use super::model::{Member, MemberStatus};
use crate::domain::DomainResult;

/// Fields for creating a member; `id` and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub rut: String,
    pub name: String,
    pub address: String,
    pub meter_number: String,
    pub status: MemberStatus,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub meter_number: Option<String>,
    pub status: Option<MemberStatus>,
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Member>>;
    async fn find_by_rut(&self, rut: &str) -> DomainResult<Option<Member>>;
    async fn find_all(&self) -> DomainResult<Vec<Member>>;
    async fn count_by_status(&self, status: MemberStatus) -> DomainResult<u64>;
    async fn save(&self, member: NewMember) -> DomainResult<Member>;
    async fn update(&self, id: i32, patch: MemberPatch) -> DomainResult<Member>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
