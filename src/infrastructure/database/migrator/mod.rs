//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_members;
mod m20250301_000002_create_users;
mod m20250301_000003_create_tariff_tiers;
mod m20250301_000004_create_readings;
mod m20250301_000005_create_invoices;
mod m20250301_000006_create_payments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_members::Migration),
            Box::new(m20250301_000002_create_users::Migration),
            Box::new(m20250301_000003_create_tariff_tiers::Migration),
            Box::new(m20250301_000004_create_readings::Migration),
            Box::new(m20250301_000005_create_invoices::Migration),
            Box::new(m20250301_000006_create_payments::Migration),
        ]
    }
}
