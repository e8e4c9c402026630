//! # Lumina APR Administration Service
//!
//! Administration backend for a rural drinking-water committee (APR):
//! member registry, meter readings, tiered billing, payments, tariff
//! configuration and user management.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository traits and the billing /
//!   consumption / aggregation calculations
//! - **application**: Services orchestrating repositories and events
//! - **infrastructure**: External concerns (SeaORM database, crypto)
//! - **interfaces**: REST API with Swagger documentation, WebSocket notifications
//! - **notifications**: Cache-invalidation event bus for UI clients

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod notifications;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;

// Re-export notifications
pub use notifications::{create_event_bus, Event, EventBus, SharedEventBus};
