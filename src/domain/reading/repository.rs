//! Reading repository interface

use async_trait::async_trait;

use super::model::Reading;
use crate::domain::DomainResult;

/// Fields for creating a reading; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReading {
    pub member_id: i32,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub consumption: i64,
    pub anomaly: bool,
    pub reading_date: chrono::DateTime<chrono::Utc>,
    pub recorded_by: String,
    pub notes: Option<String>,
}

#[async_trait]
pub trait ReadingRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reading>>;
    async fn find_all(&self) -> DomainResult<Vec<Reading>>;
    async fn find_by_member(&self, member_id: i32) -> DomainResult<Vec<Reading>>;
    /// Latest reading for a member by `reading_date`, if any.
    async fn find_latest_for_member(&self, member_id: i32) -> DomainResult<Option<Reading>>;
    /// The member's reading inside a calendar month, if one exists.
    async fn find_for_period(
        &self,
        member_id: i32,
        year: i32,
        month: u32,
    ) -> DomainResult<Option<Reading>>;
    /// All readings inside a calendar month.
    async fn find_in_period(&self, year: i32, month: u32) -> DomainResult<Vec<Reading>>;
    async fn save(&self, reading: NewReading) -> DomainResult<Reading>;
}
