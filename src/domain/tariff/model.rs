//! Tariff domain entities and the tiered billing calculation

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult};

/// A single consumption band (tramo) with its own unit price.
///
/// `tier_max = None` means the band is unbounded (the last band of a table).
/// Unit prices are monetary amounts per cubic meter.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffTier {
    pub id: i32,
    /// Lower bound of the band, inclusive
    pub tier_min: i64,
    /// Upper bound of the band, inclusive. `None` = unbounded
    pub tier_max: Option<i64>,
    /// Price per cubic meter within this band
    pub unit_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// An ordered, validated set of tariff tiers covering `[0, ∞)`.
///
/// Tables are replaced wholesale (delete-all-then-insert in one transaction),
/// never patched, so a billing calculation can never observe tiers from two
/// different tariff versions.
#[derive(Debug, Clone)]
pub struct TariffTable {
    tiers: Vec<TariffTier>,
}

impl TariffTable {
    /// Build a table from raw tiers, sorting by `tier_min` and validating
    /// the band structure.
    ///
    /// Fails with [`DomainError::InvalidTariffTable`] when the tiers are
    /// empty, do not start at zero, overlap, leave gaps, have
    /// `tier_max < tier_min`, carry a negative price, or do not end in
    /// exactly one unbounded band.
    pub fn new(mut tiers: Vec<TariffTier>) -> DomainResult<Self> {
        if tiers.is_empty() {
            return Err(DomainError::InvalidTariffTable(
                "tariff table is empty".to_string(),
            ));
        }

        tiers.sort_by_key(|t| t.tier_min);

        if tiers[0].tier_min != 0 {
            return Err(DomainError::InvalidTariffTable(format!(
                "first tier must start at 0, starts at {}",
                tiers[0].tier_min
            )));
        }

        for (i, tier) in tiers.iter().enumerate() {
            if tier.unit_price < Decimal::ZERO {
                return Err(DomainError::InvalidTariffTable(format!(
                    "tier starting at {} has a negative unit price",
                    tier.tier_min
                )));
            }

            let is_last = i == tiers.len() - 1;
            match tier.tier_max {
                None if !is_last => {
                    return Err(DomainError::InvalidTariffTable(format!(
                        "unbounded tier starting at {} is not the last tier",
                        tier.tier_min
                    )));
                }
                Some(max) if max < tier.tier_min => {
                    return Err(DomainError::InvalidTariffTable(format!(
                        "tier {}-{} has max below min",
                        tier.tier_min, max
                    )));
                }
                Some(max) if is_last => {
                    return Err(DomainError::InvalidTariffTable(format!(
                        "last tier {}-{} must be unbounded",
                        tier.tier_min, max
                    )));
                }
                _ => {}
            }

            if !is_last {
                // Safe: every non-last tier was checked bounded above
                let max = tier.tier_max.unwrap();
                let next_min = tiers[i + 1].tier_min;
                if next_min != max + 1 {
                    return Err(DomainError::InvalidTariffTable(format!(
                        "tiers are not contiguous: {}-{} followed by tier starting at {}",
                        tier.tier_min, max, next_min
                    )));
                }
            }
        }

        Ok(Self { tiers })
    }

    /// The validated tiers, ascending by `tier_min`.
    pub fn tiers(&self) -> &[TariffTier] {
        &self.tiers
    }

    /// Compute the amount owed for `consumption` cubic meters using
    /// progressive (marginal) tier pricing.
    ///
    /// Each consumed unit is priced at the band it falls into: the first
    /// units at the lowest band's price, the next units at the next band's
    /// price, and so on, with the final partial band contributing only the
    /// remainder. This is NOT flat-rate-at-the-containing-tier billing.
    ///
    /// `consumption = 0` → zero amount. Negative consumption is rejected
    /// with [`DomainError::InvalidConsumption`].
    pub fn amount_for(&self, consumption: i64) -> DomainResult<Decimal> {
        if consumption < 0 {
            return Err(DomainError::InvalidConsumption(consumption));
        }
        if consumption == 0 {
            return Ok(Decimal::ZERO);
        }

        let mut total = Decimal::ZERO;
        for tier in &self.tiers {
            // Units are counted from 1, so a 0-10 band holds units 1..=10.
            let lower = tier.tier_min.max(1);
            let upper = match tier.tier_max {
                Some(max) => consumption.min(max),
                None => consumption,
            };
            if upper < lower {
                continue;
            }
            total += tier.unit_price * Decimal::from(upper - lower + 1);
        }
        Ok(total)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: i32, min: i64, max: Option<i64>, price: i64) -> TariffTier {
        TariffTier {
            id,
            tier_min: min,
            tier_max: max,
            unit_price: Decimal::from(price),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// The standard APR table: 0-10 @ 500, 11-20 @ 800, 21-30 @ 1200, 31+ @ 2000.
    fn standard_table() -> TariffTable {
        TariffTable::new(vec![
            tier(1, 0, Some(10), 500),
            tier(2, 11, Some(20), 800),
            tier(3, 21, Some(30), 1200),
            tier(4, 31, None, 2000),
        ])
        .unwrap()
    }

    #[test]
    fn zero_consumption_is_free() {
        assert_eq!(standard_table().amount_for(0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn consumption_within_first_tier() {
        // 5 m3, all in the 0-10 band: 5 * 500
        assert_eq!(standard_table().amount_for(5).unwrap(), Decimal::from(2500));
    }

    #[test]
    fn consumption_exactly_at_tier_boundary() {
        // 10 m3: 10 * 500
        assert_eq!(
            standard_table().amount_for(10).unwrap(),
            Decimal::from(5000)
        );
        // 11 m3: 10 * 500 + 1 * 800
        assert_eq!(
            standard_table().amount_for(11).unwrap(),
            Decimal::from(5800)
        );
    }

    #[test]
    fn progressive_billing_spans_tiers() {
        // 25 m3: 10*500 + 10*800 + 5*1200 = 19000
        assert_eq!(
            standard_table().amount_for(25).unwrap(),
            Decimal::from(19_000)
        );
    }

    #[test]
    fn consumption_past_last_bounded_tier() {
        // 35 m3: 10*500 + 10*800 + 10*1200 + 5*2000 = 35000
        assert_eq!(
            standard_table().amount_for(35).unwrap(),
            Decimal::from(35_000)
        );
    }

    #[test]
    fn amount_is_monotonic_in_consumption() {
        let table = standard_table();
        let mut prev = Decimal::ZERO;
        for c in 0..100 {
            let amount = table.amount_for(c).unwrap();
            assert!(amount >= prev, "amount decreased at consumption {}", c);
            prev = amount;
        }
    }

    #[test]
    fn negative_consumption_is_rejected() {
        assert!(matches!(
            standard_table().amount_for(-1),
            Err(DomainError::InvalidConsumption(-1))
        ));
    }

    #[test]
    fn single_unbounded_tier_table() {
        let table = TariffTable::new(vec![tier(1, 0, None, 700)]).unwrap();
        assert_eq!(table.amount_for(12).unwrap(), Decimal::from(8400));
    }

    #[test]
    fn empty_table_is_invalid() {
        assert!(matches!(
            TariffTable::new(vec![]),
            Err(DomainError::InvalidTariffTable(_))
        ));
    }

    #[test]
    fn table_must_start_at_zero() {
        let err = TariffTable::new(vec![tier(1, 5, None, 500)]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn gap_between_tiers_is_invalid() {
        let err = TariffTable::new(vec![tier(1, 0, Some(10), 500), tier(2, 12, None, 800)]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn overlapping_tiers_are_invalid() {
        let err = TariffTable::new(vec![tier(1, 0, Some(10), 500), tier(2, 10, None, 800)]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn max_below_min_is_invalid() {
        let err = TariffTable::new(vec![tier(1, 0, Some(10), 500), tier(2, 11, Some(5), 800)]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn bounded_last_tier_is_invalid() {
        let err = TariffTable::new(vec![tier(1, 0, Some(10), 500), tier(2, 11, Some(20), 800)]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn unbounded_tier_in_the_middle_is_invalid() {
        let err = TariffTable::new(vec![
            tier(1, 0, None, 500),
            tier(2, 11, Some(20), 800),
        ]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn negative_price_is_invalid() {
        let err = TariffTable::new(vec![tier(1, 0, None, -5)]);
        assert!(matches!(err, Err(DomainError::InvalidTariffTable(_))));
    }

    #[test]
    fn tiers_are_sorted_on_construction() {
        let table = TariffTable::new(vec![
            tier(2, 11, None, 800),
            tier(1, 0, Some(10), 500),
        ])
        .unwrap();
        assert_eq!(table.tiers()[0].tier_min, 0);
        assert_eq!(table.tiers()[1].tier_min, 11);
    }
}
