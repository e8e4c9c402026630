//! HTTP endpoint modules, one per resource

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod invoices;
pub mod members;
pub mod metrics;
pub mod readings;
pub mod tariffs;
pub mod users;
