//! Billing service for issuing invoices and tracking payments

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::invoice::{Invoice, InvoiceStatus, NewInvoice, NewPayment, Payment, PaymentMethod};
use crate::domain::tariff::{TariffTable, TariffTier};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::notifications::{ChangeAction, EntityKind, Event, SharedEventBus};

/// Service for billing operations
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
    event_bus: SharedEventBus,
    /// Days between issue and due date
    due_days: i64,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, event_bus: SharedEventBus, due_days: i64) -> Self {
        Self {
            repos,
            event_bus,
            due_days,
        }
    }

    /// Issue an invoice from a registered reading.
    ///
    /// The amount is computed from the reading's consumption against the
    /// active tariff table and frozen; later tariff changes never touch an
    /// issued invoice. A reading can be invoiced at most once.
    pub async fn issue_invoice(&self, reading_id: i32) -> DomainResult<Invoice> {
        let reading = self
            .repos
            .readings()
            .find_by_id(reading_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reading",
                field: "id",
                value: reading_id.to_string(),
            })?;

        if let Some(existing) = self.repos.invoices().find_by_reading(reading_id).await? {
            return Err(DomainError::Conflict(format!(
                "reading {} is already invoiced as {}",
                reading_id, existing.number
            )));
        }

        let table = self.repos.tariffs().load_active_table().await?;
        let amount = table.amount_for(reading.consumption)?;

        let issue_date = Utc::now();
        let (year, month) = reading.period();
        let number = format!("B{:04}{:02}-{:04}", year, month, reading.member_id);

        let invoice = self
            .repos
            .invoices()
            .save(NewInvoice {
                member_id: reading.member_id,
                reading_id: Some(reading.id),
                number,
                consumption: reading.consumption,
                amount,
                issue_date,
                due_date: issue_date + Duration::days(self.due_days),
            })
            .await?;

        info!(
            invoice_id = invoice.id,
            number = %invoice.number,
            member_id = invoice.member_id,
            consumption = invoice.consumption,
            amount = %invoice.amount,
            "Invoice issued"
        );
        self.event_bus.publish(Event::data_changed(
            EntityKind::Invoices,
            ChangeAction::Created,
            Some(invoice.id.to_string()),
        ));

        Ok(invoice)
    }

    /// Register a payment against a pending or overdue invoice, marking it
    /// paid. The payment row keeps the full invoiced amount.
    pub async fn register_payment(
        &self,
        invoice_id: i32,
        method: PaymentMethod,
    ) -> DomainResult<Payment> {
        let invoice = self
            .repos
            .invoices()
            .find_by_id(invoice_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Invoice",
                field: "id",
                value: invoice_id.to_string(),
            })?;

        if invoice.status == InvoiceStatus::Paid {
            return Err(DomainError::Conflict(format!(
                "invoice {} is already paid",
                invoice.number
            )));
        }

        let paid_at = Utc::now();
        self.repos
            .invoices()
            .set_status(invoice.id, InvoiceStatus::Paid, Some(paid_at))
            .await?;

        let payment = self
            .repos
            .payments()
            .save(NewPayment {
                invoice_id: invoice.id,
                member_id: invoice.member_id,
                amount: invoice.amount,
                method,
                paid_at,
            })
            .await?;

        info!(
            invoice_id = invoice.id,
            number = %invoice.number,
            amount = %payment.amount,
            method = %payment.method,
            "Payment registered"
        );
        self.event_bus.publish(Event::data_changed(
            EntityKind::Invoices,
            ChangeAction::StatusChanged,
            Some(invoice.id.to_string()),
        ));
        self.event_bus.publish(Event::data_changed(
            EntityKind::Payments,
            ChangeAction::Created,
            Some(payment.id.to_string()),
        ));

        Ok(payment)
    }

    /// Compute the amount a given consumption would be billed at today,
    /// without persisting anything.
    pub async fn preview_amount(&self, consumption: i64) -> DomainResult<Decimal> {
        let table = self.repos.tariffs().load_active_table().await?;
        table.amount_for(consumption)
    }

    /// Transition pending invoices past their due date to overdue.
    /// Returns the number of invoices affected.
    pub async fn refresh_overdue(&self) -> DomainResult<u64> {
        let now = Utc::now();
        let pending = self
            .repos
            .invoices()
            .find_by_status(InvoiceStatus::Pending)
            .await?;

        let mut affected = 0u64;
        for invoice in pending {
            if invoice.is_past_due(now) {
                self.repos
                    .invoices()
                    .set_status(invoice.id, InvoiceStatus::Overdue, None)
                    .await?;
                affected += 1;
            }
        }

        if affected > 0 {
            info!(affected, "Invoices marked overdue");
            self.event_bus.publish(Event::data_changed(
                EntityKind::Invoices,
                ChangeAction::StatusChanged,
                None,
            ));
        }

        Ok(affected)
    }

    // ── Tariff table management ─────────────────────────────────

    pub async fn list_tariffs(&self) -> DomainResult<Vec<TariffTier>> {
        self.repos.tariffs().find_active().await
    }

    /// Replace the whole tariff table atomically. The new tiers are
    /// validated before any write happens; a malformed table leaves the
    /// current one untouched.
    pub async fn replace_tariffs(&self, tiers: Vec<TariffTier>) -> DomainResult<Vec<TariffTier>> {
        TariffTable::new(tiers.clone())?;
        let saved = self.repos.tariffs().replace_all(tiers).await?;

        info!(tiers = saved.len(), "Tariff table replaced");
        self.event_bus.publish(Event::data_changed(
            EntityKind::Tariffs,
            ChangeAction::Replaced,
            None,
        ));

        Ok(saved)
    }
}
