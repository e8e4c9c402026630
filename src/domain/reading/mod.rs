//! Reading aggregate
//!
//! Meter readings and the consumption delta engine.

pub mod model;
pub mod repository;

pub use model::{compute_consumption, Reading, ReadingDelta};
pub use repository::{NewReading, ReadingRepository};
