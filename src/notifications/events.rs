//! Notification events
//!
//! Cache-invalidation events published by the owning service after each
//! successful mutation, plus the consumption anomaly advisory. UI clients
//! subscribe over WebSocket and invalidate their cached queries for the
//! affected entity type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity types a client may have cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Members,
    Readings,
    Invoices,
    Payments,
    Tariffs,
    Users,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Readings => "readings",
            Self::Invoices => "invoices",
            Self::Payments => "payments",
            Self::Tariffs => "tariffs",
            Self::Users => "users",
        }
    }
}

/// What happened to the entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
    /// Wholesale snapshot swap (tariff table replacement)
    Replaced,
    StatusChanged,
}

/// Event types for notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Event {
    /// A collection changed; clients should invalidate that entity's cache
    DataChanged(DataChangedEvent),
    /// A meter reading decreased; flagged for manual review
    ConsumptionAnomaly(ConsumptionAnomalyEvent),
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::DataChanged(_) => "data_changed",
            Event::ConsumptionAnomaly(_) => "consumption_anomaly",
        }
    }

    /// Entity type the event invalidates, if any
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            Event::DataChanged(e) => Some(e.entity),
            Event::ConsumptionAnomaly(_) => None,
        }
    }

    /// Convenience constructor for invalidate-on-write events
    pub fn data_changed(entity: EntityKind, action: ChangeAction, entity_id: Option<String>) -> Self {
        Event::DataChanged(DataChangedEvent {
            entity,
            action,
            entity_id,
            timestamp: Utc::now(),
        })
    }
}

/// Invalidate-on-write notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataChangedEvent {
    pub entity: EntityKind,
    pub action: ChangeAction,
    pub entity_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Advisory raised when a meter appears to have run backwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionAnomalyEvent {
    pub member_id: i32,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub timestamp: DateTime<Utc>,
}

/// Envelope broadcast to subscribers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub event: Event,
    pub timestamp: DateTime<Utc>,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            timestamp: Utc::now(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_changed_serializes_with_tagged_shape() {
        let event = Event::data_changed(EntityKind::Members, ChangeAction::Created, Some("7".into()));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "data_changed");
        assert_eq!(json["data"]["entity"], "members");
        assert_eq!(json["data"]["action"], "created");
    }

    #[test]
    fn anomaly_has_no_entity_kind() {
        let event = Event::ConsumptionAnomaly(ConsumptionAnomalyEvent {
            member_id: 3,
            previous_reading: 100,
            current_reading: 95,
            timestamp: Utc::now(),
        });
        assert_eq!(event.event_type(), "consumption_anomaly");
        assert!(event.entity_kind().is_none());
    }
}
