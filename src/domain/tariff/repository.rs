//! Tariff repository interface

use async_trait::async_trait;

use super::model::{TariffTable, TariffTier};
use crate::domain::DomainResult;

#[async_trait]
pub trait TariffRepository: Send + Sync {
    /// Load the active tariff table, validated.
    async fn load_active_table(&self) -> DomainResult<TariffTable>;

    /// Raw active tiers, ascending by `tier_min` (unvalidated listing).
    async fn find_active(&self) -> DomainResult<Vec<TariffTier>>;

    /// Replace the whole active table atomically: the previous tiers are
    /// deleted and the new ones inserted in a single transaction.
    async fn replace_all(&self, tiers: Vec<TariffTier>) -> DomainResult<Vec<TariffTier>>;
}
