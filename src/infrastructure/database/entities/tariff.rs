//! Tariff tier (tramo) entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tariff tier model - one consumption band of the active tariff table.
/// The active set is replaced wholesale, never patched row by row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tariff_tiers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Lower bound of the band, inclusive (m3)
    pub tier_min: i64,

    /// Upper bound of the band, inclusive. NULL = unbounded (last band)
    pub tier_max: Option<i64>,

    /// Price per cubic meter within the band
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub unit_price: Decimal,

    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
