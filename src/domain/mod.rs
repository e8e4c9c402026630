//! Domain layer: entities, repository traits and the calculation core

pub mod error;
pub mod invoice;
pub mod member;
pub mod reading;
pub mod repositories;
pub mod tariff;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use invoice::{
    summarize, AccountSummary, Invoice, InvoiceStatus, Payment, PaymentMethod,
};
pub use member::{Member, MemberStatus};
pub use reading::{compute_consumption, Reading, ReadingDelta};
pub use repositories::RepositoryProvider;
pub use tariff::{TariffTable, TariffTier};
pub use user::{str_to_role, User, UserRole};
