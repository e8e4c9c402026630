//! Invoice DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::invoice::{AccountSummary, Invoice, InvoiceStatus, Payment, PaymentMethod};

/// Invoice (boleta) API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceDto {
    pub id: i32,
    pub member_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_id: Option<i32>,
    pub number: String,
    pub consumption: i64,
    pub amount: Decimal,
    /// "pending" | "paid" | "overdue"
    pub status: String,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl From<Invoice> for InvoiceDto {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id,
            member_id: i.member_id,
            reading_id: i.reading_id,
            number: i.number,
            consumption: i.consumption,
            amount: i.amount,
            status: i.status.to_string(),
            issue_date: i.issue_date,
            due_date: i.due_date,
            paid_at: i.paid_at,
        }
    }
}

pub fn parse_invoice_status(s: &str) -> Option<InvoiceStatus> {
    match s {
        "pending" => Some(InvoiceStatus::Pending),
        "paid" => Some(InvoiceStatus::Paid),
        "overdue" => Some(InvoiceStatus::Overdue),
        _ => None,
    }
}

/// Invoice query filters
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct InvoiceFilter {
    pub member_id: Option<i32>,
    /// "pending" | "paid" | "overdue"
    pub status: Option<String>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
}

/// Issue invoice request: bills the consumption of an existing reading
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueInvoiceRequest {
    pub reading_id: i32,
}

/// Register payment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterPaymentRequest {
    /// "cash" | "transfer" | "card" | "other". Defaults to "cash"
    pub method: Option<String>,
}

pub fn parse_payment_method(s: &str) -> PaymentMethod {
    match s {
        "transfer" => PaymentMethod::Transfer,
        "card" => PaymentMethod::Card,
        "other" => PaymentMethod::Other,
        _ => PaymentMethod::Cash,
    }
}

/// Payment API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub invoice_id: i32,
    pub member_id: i32,
    pub amount: Decimal,
    pub method: String,
    pub paid_at: DateTime<Utc>,
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            invoice_id: p.invoice_id,
            member_id: p.member_id,
            amount: p.amount,
            method: p.method.to_string(),
            paid_at: p.paid_at,
        }
    }
}

/// Portfolio billing statistics
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountSummaryDto {
    pub total_billed: Decimal,
    pub total_collected: Decimal,
    pub total_outstanding: Decimal,
    pub overdue_count: u32,
    /// 0-100, ties rounded half-up
    pub collection_percentage: u32,
}

impl From<AccountSummary> for AccountSummaryDto {
    fn from(s: AccountSummary) -> Self {
        Self {
            total_billed: s.total_billed,
            total_collected: s.total_collected,
            total_outstanding: s.total_outstanding,
            overdue_count: s.overdue_count,
            collection_percentage: s.collection_percentage,
        }
    }
}
