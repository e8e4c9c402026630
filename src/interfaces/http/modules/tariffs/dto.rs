//! Tariff DTOs

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::TariffTier;

/// One consumption band (tramo) of the tariff table
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TariffTierDto {
    pub id: i32,
    /// Lower bound, inclusive (m3)
    pub tier_min: i64,
    /// Upper bound, inclusive. `null` = unbounded (last band)
    pub tier_max: Option<i64>,
    /// Price per cubic meter
    pub unit_price: Decimal,
}

impl From<TariffTier> for TariffTierDto {
    fn from(t: TariffTier) -> Self {
        Self {
            id: t.id,
            tier_min: t.tier_min,
            tier_max: t.tier_max,
            unit_price: t.unit_price,
        }
    }
}

/// One band of a replacement table
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct TariffTierInput {
    #[validate(range(min = 0, message = "tier_min must be non-negative"))]
    pub tier_min: i64,
    pub tier_max: Option<i64>,
    pub unit_price: Decimal,
}

impl TariffTierInput {
    pub fn into_domain(self) -> TariffTier {
        TariffTier {
            id: 0,
            tier_min: self.tier_min,
            tier_max: self.tier_max,
            unit_price: self.unit_price,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// Wholesale tariff table replacement. The submitted tiers must be
/// contiguous from 0 and end in an unbounded band.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReplaceTariffsRequest {
    #[validate(length(min = 1, message = "at least one tier is required"), nested)]
    pub tiers: Vec<TariffTierInput>,
}

/// Amount preview request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PreviewAmountRequest {
    #[validate(range(min = 0, message = "consumption must be non-negative"))]
    pub consumption: i64,
}

/// Amount preview response
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewAmountResponse {
    pub consumption: i64,
    /// Amount the consumption would be billed at under the active table
    pub amount: Decimal,
}
