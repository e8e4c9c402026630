//! Invoice & payment repository interfaces

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::model::{Invoice, InvoiceStatus, Payment, PaymentMethod};
use crate::domain::DomainResult;

/// Fields for issuing an invoice; `id` and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub member_id: i32,
    pub reading_id: Option<i32>,
    pub number: String,
    pub consumption: i64,
    pub amount: Decimal,
    pub issue_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

/// Fields for registering a payment.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub invoice_id: i32,
    pub member_id: i32,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub paid_at: DateTime<Utc>,
}

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Invoice>>;
    async fn find_all(&self) -> DomainResult<Vec<Invoice>>;
    async fn find_by_member(&self, member_id: i32) -> DomainResult<Vec<Invoice>>;
    async fn find_by_status(&self, status: InvoiceStatus) -> DomainResult<Vec<Invoice>>;
    async fn find_by_reading(&self, reading_id: i32) -> DomainResult<Option<Invoice>>;
    async fn save(&self, invoice: NewInvoice) -> DomainResult<Invoice>;
    /// Transition an invoice's status; `paid_at` is stamped for `Paid`.
    async fn set_status(
        &self,
        id: i32,
        status: InvoiceStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> DomainResult<()>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_by_invoice(&self, invoice_id: i32) -> DomainResult<Vec<Payment>>;
    async fn find_recent(&self, limit: u64) -> DomainResult<Vec<Payment>>;
    async fn save(&self, payment: NewPayment) -> DomainResult<Payment>;
}
