//! Real-time notifications for UI clients
//!
//! - `events`: event types (cache invalidation + anomaly advisory)
//! - `event_bus`: tokio broadcast pub/sub

pub mod event_bus;
pub mod events;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use events::{
    ChangeAction, ConsumptionAnomalyEvent, DataChangedEvent, EntityKind, Event, EventMessage,
};
