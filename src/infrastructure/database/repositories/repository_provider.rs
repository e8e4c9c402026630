//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::invoice::{InvoiceRepository, PaymentRepository};
use crate::domain::member::MemberRepository;
use crate::domain::reading::ReadingRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::tariff::TariffRepository;
use crate::domain::user::UserRepository;

use super::invoice_repository::{SeaOrmInvoiceRepository, SeaOrmPaymentRepository};
use super::member_repository::SeaOrmMemberRepository;
use super::reading_repository::SeaOrmReadingRepository;
use super::tariff_repository::SeaOrmTariffRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let member = repos.members().find_by_rut("12.345.678-9").await?;
/// let invoices = repos.invoices().find_by_member(member.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    members: SeaOrmMemberRepository,
    readings: SeaOrmReadingRepository,
    invoices: SeaOrmInvoiceRepository,
    payments: SeaOrmPaymentRepository,
    tariffs: SeaOrmTariffRepository,
    users: SeaOrmUserRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            members: SeaOrmMemberRepository::new(db.clone()),
            readings: SeaOrmReadingRepository::new(db.clone()),
            invoices: SeaOrmInvoiceRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            tariffs: SeaOrmTariffRepository::new(db.clone()),
            users: SeaOrmUserRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn members(&self) -> &dyn MemberRepository {
        &self.members
    }

    fn readings(&self) -> &dyn ReadingRepository {
        &self.readings
    }

    fn invoices(&self) -> &dyn InvoiceRepository {
        &self.invoices
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn tariffs(&self) -> &dyn TariffRepository {
        &self.tariffs
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }
}
