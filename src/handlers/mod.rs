pub mod inventory;
pub mod locations;
pub mod materials;
pub mod transactions;

use crate::db::DbPool;
use crate::events::EventSender;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub locations: Arc<crate::services::locations::LocationService>,
    pub materials: Arc<crate::services::materials::MaterialService>,
    pub inventory: Arc<crate::services::inventory::InventoryService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            locations: Arc::new(crate::services::locations::LocationService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            materials: Arc::new(crate::services::materials::MaterialService::new(
                db_pool.clone(),
                event_sender.clone(),
            )),
            inventory: Arc::new(crate::services::inventory::InventoryService::new(
                db_pool,
                event_sender,
            )),
        }
    }
}
