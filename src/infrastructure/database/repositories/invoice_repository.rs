//! SeaORM implementations of InvoiceRepository and PaymentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::invoice::{
    Invoice, InvoiceRepository, InvoiceStatus, NewInvoice, NewPayment, Payment, PaymentMethod,
    PaymentRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{invoice, payment};

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn status_to_domain(s: invoice::InvoiceStatus) -> InvoiceStatus {
    match s {
        invoice::InvoiceStatus::Pending => InvoiceStatus::Pending,
        invoice::InvoiceStatus::Paid => InvoiceStatus::Paid,
        invoice::InvoiceStatus::Overdue => InvoiceStatus::Overdue,
    }
}

fn status_to_entity(s: InvoiceStatus) -> invoice::InvoiceStatus {
    match s {
        InvoiceStatus::Pending => invoice::InvoiceStatus::Pending,
        InvoiceStatus::Paid => invoice::InvoiceStatus::Paid,
        InvoiceStatus::Overdue => invoice::InvoiceStatus::Overdue,
    }
}

fn entity_to_domain(i: invoice::Model) -> Invoice {
    Invoice {
        id: i.id,
        member_id: i.member_id,
        reading_id: i.reading_id,
        number: i.number,
        consumption: i.consumption,
        amount: i.amount,
        status: status_to_domain(i.status),
        issue_date: i.issue_date,
        due_date: i.due_date,
        paid_at: i.paid_at,
        created_at: i.created_at,
        updated_at: i.updated_at,
    }
}

fn method_to_domain(m: payment::PaymentMethod) -> PaymentMethod {
    match m {
        payment::PaymentMethod::Cash => PaymentMethod::Cash,
        payment::PaymentMethod::Transfer => PaymentMethod::Transfer,
        payment::PaymentMethod::Card => PaymentMethod::Card,
        payment::PaymentMethod::Other => PaymentMethod::Other,
    }
}

fn method_to_entity(m: PaymentMethod) -> payment::PaymentMethod {
    match m {
        PaymentMethod::Cash => payment::PaymentMethod::Cash,
        PaymentMethod::Transfer => payment::PaymentMethod::Transfer,
        PaymentMethod::Card => payment::PaymentMethod::Card,
        PaymentMethod::Other => payment::PaymentMethod::Other,
    }
}

fn payment_to_domain(p: payment::Model) -> Payment {
    Payment {
        id: p.id,
        invoice_id: p.invoice_id,
        member_id: p.member_id,
        amount: p.amount,
        method: method_to_domain(p.method),
        paid_at: p.paid_at,
    }
}

// ── SeaOrmInvoiceRepository ─────────────────────────────────────

pub struct SeaOrmInvoiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Invoice>> {
        let model = invoice::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .order_by_desc(invoice::Column::IssueDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_member(&self, member_id: i32) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .filter(invoice::Column::MemberId.eq(member_id))
            .order_by_desc(invoice::Column::IssueDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_status(&self, status: InvoiceStatus) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .filter(invoice::Column::Status.eq(status_to_entity(status)))
            .order_by_desc(invoice::Column::IssueDate)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_reading(&self, reading_id: i32) -> DomainResult<Option<Invoice>> {
        let model = invoice::Entity::find()
            .filter(invoice::Column::ReadingId.eq(reading_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn save(&self, i: NewInvoice) -> DomainResult<Invoice> {
        let now = Utc::now();
        let model = invoice::ActiveModel {
            id: NotSet,
            member_id: Set(i.member_id),
            reading_id: Set(i.reading_id),
            number: Set(i.number),
            consumption: Set(i.consumption),
            amount: Set(i.amount),
            status: Set(invoice::InvoiceStatus::Pending),
            issue_date: Set(i.issue_date),
            due_date: Set(i.due_date),
            paid_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Invoice saved: {} member={} amount={}",
            result.number, result.member_id, result.amount
        );
        Ok(entity_to_domain(result))
    }

    async fn set_status(
        &self,
        id: i32,
        status: InvoiceStatus,
        paid_at: Option<DateTime<Utc>>,
    ) -> DomainResult<()> {
        let existing = invoice::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Invoice",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut model: invoice::ActiveModel = existing.into();
        model.status = Set(status_to_entity(status));
        model.paid_at = Set(paid_at);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await.map_err(db_err)?;

        info!("Invoice {} status set to {}", id, status);
        Ok(())
    }
}

// ── SeaOrmPaymentRepository ─────────────────────────────────────

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn find_by_invoice(&self, invoice_id: i32) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .filter(payment::Column::InvoiceId.eq(invoice_id))
            .order_by_desc(payment::Column::PaidAt)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(payment_to_domain).collect())
    }

    async fn find_recent(&self, limit: u64) -> DomainResult<Vec<Payment>> {
        let models = payment::Entity::find()
            .order_by_desc(payment::Column::PaidAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(payment_to_domain).collect())
    }

    async fn save(&self, p: NewPayment) -> DomainResult<Payment> {
        let model = payment::ActiveModel {
            id: NotSet,
            invoice_id: Set(p.invoice_id),
            member_id: Set(p.member_id),
            amount: Set(p.amount),
            method: Set(method_to_entity(p.method)),
            paid_at: Set(p.paid_at),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Payment saved: invoice={} amount={}",
            result.invoice_id, result.amount
        );
        Ok(payment_to_domain(result))
    }
}
