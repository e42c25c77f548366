use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Events emitted after a ledger-affecting operation commits.
///
/// Delivery is best-effort: a full or closed channel never fails the
/// originating request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    LocationCreated {
        id: i32,
        name: String,
    },
    MaterialCreated {
        id: i32,
        name: String,
        unit: String,
    },
    StockAdded {
        location_id: i32,
        material_id: i32,
        quantity: i32,
    },
    StockRemoved {
        location_id: i32,
        material_id: i32,
        quantity: i32,
    },
    StockTransferred {
        from_location_id: i32,
        to_location_id: i32,
        material_id: i32,
        quantity: i32,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Fire-and-forget send used after a committed mutation.
    pub async fn send_best_effort(&self, event: Event) {
        if let Err(e) = self.send(event).await {
            warn!("dropping event: {}", e);
        }
    }
}

/// Consumes events off the channel and logs them. Runs until every sender is
/// dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        match &event {
            Event::LocationCreated { id, name } => {
                info!(id, name = %name, "location created");
            }
            Event::MaterialCreated { id, name, unit } => {
                info!(id, name = %name, unit = %unit, "material created");
            }
            Event::StockAdded {
                location_id,
                material_id,
                quantity,
            } => {
                info!(location_id, material_id, quantity, "stock added");
            }
            Event::StockRemoved {
                location_id,
                material_id,
                quantity,
            } => {
                info!(location_id, material_id, quantity, "stock removed");
            }
            Event::StockTransferred {
                from_location_id,
                to_location_id,
                material_id,
                quantity,
            } => {
                info!(
                    from_location_id,
                    to_location_id, material_id, quantity, "stock transferred"
                );
            }
        }
    }
    info!("event channel closed; processor exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_best_effort_ignores_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);
        // Must not panic or error out.
        sender
            .send_best_effort(Event::StockAdded {
                location_id: 1,
                material_id: 1,
                quantity: 5,
            })
            .await;
    }

    #[tokio::test]
    async fn events_round_trip_through_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);
        sender
            .send(Event::LocationCreated {
                id: 7,
                name: "Warehouse A".into(),
            })
            .await
            .expect("send");

        match rx.recv().await {
            Some(Event::LocationCreated { id, name }) => {
                assert_eq!(id, 7);
                assert_eq!(name, "Warehouse A");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
