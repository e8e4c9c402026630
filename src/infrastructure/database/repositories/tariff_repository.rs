//! SeaORM implementation of TariffRepository
//!
//! The active tariff table is replaced wholesale inside one transaction so a
//! billing calculation can never observe tiers from two tariff versions.

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::tariff::{TariffRepository, TariffTable, TariffTier};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::tariff;

use super::db_err;

fn entity_to_domain(t: tariff::Model) -> TariffTier {
    TariffTier {
        id: t.id,
        tier_min: t.tier_min,
        tier_max: t.tier_max,
        unit_price: t.unit_price,
        is_active: t.is_active,
        created_at: t.created_at,
    }
}

// ── SeaOrmTariffRepository ──────────────────────────────────────

pub struct SeaOrmTariffRepository {
    db: DatabaseConnection,
}

impl SeaOrmTariffRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TariffRepository for SeaOrmTariffRepository {
    async fn load_active_table(&self) -> DomainResult<TariffTable> {
        let tiers = self.find_active().await?;
        TariffTable::new(tiers)
    }

    async fn find_active(&self) -> DomainResult<Vec<TariffTier>> {
        let models = tariff::Entity::find()
            .filter(tariff::Column::IsActive.eq(true))
            .order_by_asc(tariff::Column::TierMin)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn replace_all(&self, tiers: Vec<TariffTier>) -> DomainResult<Vec<TariffTier>> {
        let count = tiers.len();
        let saved = self
            .db
            .transaction::<_, Vec<tariff::Model>, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    tariff::Entity::delete_many()
                        .filter(tariff::Column::IsActive.eq(true))
                        .exec(txn)
                        .await?;

                    let now = Utc::now();
                    let mut saved = Vec::with_capacity(tiers.len());
                    for t in tiers {
                        let model = tariff::ActiveModel {
                            id: NotSet,
                            tier_min: Set(t.tier_min),
                            tier_max: Set(t.tier_max),
                            unit_price: Set(t.unit_price),
                            is_active: Set(true),
                            created_at: Set(now),
                        };
                        saved.push(model.insert(txn).await?);
                    }
                    Ok(saved)
                })
            })
            .await
            .map_err(|e| DomainError::Validation(format!("Database error: {}", e)))?;

        info!("Tariff table replaced: {} tiers", count);
        Ok(saved.into_iter().map(entity_to_domain).collect())
    }
}
