//! Tariff aggregate
//!
//! Contains the tariff tier entity, the validated tariff table, and the
//! progressive billing calculation.

pub mod model;
pub mod repository;

pub use model::{TariffTable, TariffTier};
pub use repository::TariffRepository;
