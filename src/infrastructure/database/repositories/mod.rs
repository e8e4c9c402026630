//! SeaORM repository implementations

pub mod invoice_repository;
pub mod member_repository;
pub mod reading_repository;
pub mod repository_provider;
pub mod tariff_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

/// Map a SeaORM error into the domain error space.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}
