//! WebSocket handler for UI notification clients
//!
//! Streams cache-invalidation and anomaly events so UI clients can refresh
//! the affected entity's queries.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio::select;
use tracing::{debug, error, info};

use crate::notifications::{EventMessage, SharedEventBus};

/// Query parameters for filtering events
#[derive(Debug, Deserialize)]
pub struct EventFilter {
    /// Filter by entity type (members, readings, invoices, payments,
    /// tariffs, users; optional)
    pub entity: Option<String>,
    /// Filter by event types (comma-separated, optional)
    pub event_types: Option<String>,
}

impl EventFilter {
    /// Check if event matches the filter
    pub fn matches(&self, event: &EventMessage) -> bool {
        if let Some(ref entity) = self.entity {
            match event.event.entity_kind() {
                Some(kind) if kind.as_str() == entity => {}
                // Anomaly notices carry no entity; pass them through so a
                // filtered client still sees review flags
                None => {}
                Some(_) => return false,
            }
        }

        if let Some(ref types) = self.event_types {
            let allowed_types: Vec<&str> = types.split(',').map(|s| s.trim()).collect();
            if !allowed_types.contains(&event.event.event_type()) {
                return false;
            }
        }

        true
    }
}

/// State for notification WebSocket handler
#[derive(Clone)]
pub struct NotificationState {
    pub event_bus: SharedEventBus,
}

/// Create the notification handler state
pub fn create_notification_state(event_bus: SharedEventBus) -> NotificationState {
    NotificationState { event_bus }
}

/// WebSocket upgrade handler for notifications
pub async fn ws_notifications_handler(
    ws: WebSocketUpgrade,
    State(state): State<NotificationState>,
    Query(filter): Query<EventFilter>,
) -> impl IntoResponse {
    info!(
        "New notification WebSocket connection: entity={:?}, event_types={:?}",
        filter.entity, filter.event_types
    );

    ws.on_upgrade(move |socket| handle_notification_socket(socket, state, filter))
}

/// Handle a WebSocket connection for notifications
async fn handle_notification_socket(
    socket: WebSocket,
    state: NotificationState,
    filter: EventFilter,
) {
    let (mut sender, mut receiver) = socket.split();
    let mut subscriber = state.event_bus.subscribe();

    // Send welcome message
    let welcome = serde_json::json!({
        "type": "connected",
        "message": "Connected to notification stream",
        "filter": {
            "entity": filter.entity,
            "event_types": filter.event_types
        }
    });

    if let Err(e) = sender.send(Message::Text(welcome.to_string().into())).await {
        error!("Failed to send welcome message: {}", e);
        return;
    }

    info!("Notification WebSocket client connected");

    loop {
        select! {
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Received text message: {}", text);
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if let Err(e) = sender.send(Message::Pong(data)).await {
                            error!("Failed to send pong: {}", e);
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Notification WebSocket client disconnected");
                        break;
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            event = subscriber.recv() => {
                let Some(event) = event else {
                    info!("Event bus closed, dropping WebSocket client");
                    break;
                };

                if !filter.matches(&event) {
                    continue;
                }

                match serde_json::to_string(&event) {
                    Ok(payload) => {
                        if let Err(e) = sender.send(Message::Text(payload.into())).await {
                            debug!("Failed to send event, client gone: {}", e);
                            break;
                        }
                    }
                    Err(e) => error!("Failed to serialize event: {}", e),
                }
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{ChangeAction, EntityKind, Event};

    fn message(entity: EntityKind) -> EventMessage {
        EventMessage::new(Event::data_changed(entity, ChangeAction::Created, None))
    }

    #[test]
    fn no_filter_matches_everything() {
        let filter = EventFilter {
            entity: None,
            event_types: None,
        };
        assert!(filter.matches(&message(EntityKind::Members)));
    }

    #[test]
    fn entity_filter_rejects_other_entities() {
        let filter = EventFilter {
            entity: Some("invoices".into()),
            event_types: None,
        };
        assert!(filter.matches(&message(EntityKind::Invoices)));
        assert!(!filter.matches(&message(EntityKind::Members)));
    }

    #[test]
    fn event_type_filter() {
        let filter = EventFilter {
            entity: None,
            event_types: Some("consumption_anomaly".into()),
        };
        assert!(!filter.matches(&message(EntityKind::Readings)));
    }
}
