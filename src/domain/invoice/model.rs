//! Invoice and payment entities plus the account aggregation

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Invoice (boleta) status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

/// A billing document for one period's consumption.
///
/// `amount` is computed from `consumption` via the tariff table at issue
/// time and never recomputed: invoices are a point-in-time snapshot, immune
/// to later tariff changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub member_id: i32,
    /// Reading this invoice was issued from, when known
    pub reading_id: Option<i32>,
    /// Folio, e.g. "B202602-0007"
    pub number: String,
    pub consumption: i64,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Whether a pending invoice has passed its due date at `now`.
    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        self.status == InvoiceStatus::Pending && now > self.due_date
    }
}

/// Payment method for a registered payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Card,
    Other,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Transfer => write!(f, "transfer"),
            Self::Card => write!(f, "card"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A payment (pago) registered against an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub invoice_id: i32,
    pub member_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

/// Portfolio-level billing statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub total_billed: Decimal,
    pub total_collected: Decimal,
    pub total_outstanding: Decimal,
    pub overdue_count: u32,
    /// `round(100 * collected / billed)`, nearest integer, ties half-up;
    /// zero when nothing has been billed.
    pub collection_percentage: u32,
}

impl AccountSummary {
    pub fn empty() -> Self {
        Self {
            total_billed: Decimal::ZERO,
            total_collected: Decimal::ZERO,
            total_outstanding: Decimal::ZERO,
            overdue_count: 0,
            collection_percentage: 0,
        }
    }
}

/// Aggregate a set of invoices into portfolio statistics.
///
/// Pure and total over any finite slice, including the empty one, and
/// invariant under reordering of the input.
pub fn summarize(invoices: &[Invoice]) -> AccountSummary {
    let mut total_billed = Decimal::ZERO;
    let mut total_collected = Decimal::ZERO;
    let mut total_outstanding = Decimal::ZERO;
    let mut overdue_count = 0u32;

    for invoice in invoices {
        total_billed += invoice.amount;
        match invoice.status {
            InvoiceStatus::Paid => total_collected += invoice.amount,
            InvoiceStatus::Pending => total_outstanding += invoice.amount,
            InvoiceStatus::Overdue => overdue_count += 1,
        }
    }

    let collection_percentage = if total_billed > Decimal::ZERO {
        (Decimal::ONE_HUNDRED * total_collected / total_billed)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    } else {
        0
    };

    AccountSummary {
        total_billed,
        total_collected,
        total_outstanding,
        overdue_count,
        collection_percentage,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: i32, amount: i64, status: InvoiceStatus) -> Invoice {
        let now = Utc::now();
        Invoice {
            id,
            member_id: 1,
            reading_id: None,
            number: format!("B202601-{:04}", id),
            consumption: 10,
            amount: Decimal::from(amount),
            status,
            issue_date: now,
            due_date: now,
            paid_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_portfolio_is_all_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary, AccountSummary::empty());
    }

    #[test]
    fn mixed_portfolio_scenario() {
        let invoices = vec![
            invoice(1, 10_000, InvoiceStatus::Paid),
            invoice(2, 5_000, InvoiceStatus::Pending),
            invoice(3, 3_000, InvoiceStatus::Overdue),
        ];
        let summary = summarize(&invoices);
        assert_eq!(summary.total_billed, Decimal::from(18_000));
        assert_eq!(summary.total_collected, Decimal::from(10_000));
        assert_eq!(summary.total_outstanding, Decimal::from(5_000));
        assert_eq!(summary.overdue_count, 1);
        // 100 * 10000 / 18000 = 55.55.. -> 56
        assert_eq!(summary.collection_percentage, 56);
    }

    #[test]
    fn summary_is_order_invariant() {
        let mut invoices = vec![
            invoice(1, 10_000, InvoiceStatus::Paid),
            invoice(2, 5_000, InvoiceStatus::Pending),
            invoice(3, 3_000, InvoiceStatus::Overdue),
        ];
        let forward = summarize(&invoices);
        invoices.reverse();
        assert_eq!(summarize(&invoices), forward);
    }

    #[test]
    fn percentage_rounds_ties_half_up() {
        // 100 * 1000 / 16000 = 6.25 -> 6; 100 * 1000 / 8000 = 12.5 -> 13
        let low = vec![
            invoice(1, 1_000, InvoiceStatus::Paid),
            invoice(2, 15_000, InvoiceStatus::Pending),
        ];
        assert_eq!(summarize(&low).collection_percentage, 6);

        let tie = vec![
            invoice(1, 1_000, InvoiceStatus::Paid),
            invoice(2, 7_000, InvoiceStatus::Pending),
        ];
        assert_eq!(summarize(&tie).collection_percentage, 13);
    }

    #[test]
    fn fully_collected_is_one_hundred_percent() {
        let invoices = vec![
            invoice(1, 4_000, InvoiceStatus::Paid),
            invoice(2, 6_000, InvoiceStatus::Paid),
        ];
        let summary = summarize(&invoices);
        assert_eq!(summary.collection_percentage, 100);
        assert_eq!(summary.total_outstanding, Decimal::ZERO);
    }

    #[test]
    fn overdue_amounts_count_toward_billed_not_outstanding() {
        let invoices = vec![invoice(1, 3_000, InvoiceStatus::Overdue)];
        let summary = summarize(&invoices);
        assert_eq!(summary.total_billed, Decimal::from(3_000));
        assert_eq!(summary.total_outstanding, Decimal::ZERO);
        assert_eq!(summary.overdue_count, 1);
        assert_eq!(summary.collection_percentage, 0);
    }

    #[test]
    fn past_due_detection() {
        let mut inv = invoice(1, 1_000, InvoiceStatus::Pending);
        inv.due_date = Utc::now() - chrono::Duration::days(1);
        assert!(inv.is_past_due(Utc::now()));

        inv.status = InvoiceStatus::Paid;
        assert!(!inv.is_past_due(Utc::now()));
    }
}
