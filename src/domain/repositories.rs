//! Repository provider trait
//!
//! One object owning every per-aggregate repository, injected into services
//! and handlers so the storage backend stays swappable.

use crate::domain::invoice::{InvoiceRepository, PaymentRepository};
use crate::domain::member::MemberRepository;
use crate::domain::reading::ReadingRepository;
use crate::domain::tariff::TariffRepository;
use crate::domain::user::UserRepository;

pub trait RepositoryProvider: Send + Sync {
    fn members(&self) -> &dyn MemberRepository;
    fn readings(&self) -> &dyn ReadingRepository;
    fn invoices(&self) -> &dyn InvoiceRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn tariffs(&self) -> &dyn TariffRepository;
    fn users(&self) -> &dyn UserRepository;
}
