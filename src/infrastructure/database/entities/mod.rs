//! SeaORM entities

pub mod invoice;
pub mod member;
pub mod payment;
pub mod reading;
pub mod tariff;
pub mod user;
