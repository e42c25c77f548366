use crate::{
    db::DbPool,
    entities::location::{self, Entity as Location},
    errors::ServiceError,
    events::{Event, EventSender},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};
use std::sync::Arc;
use tracing::instrument;

/// Service for managing locations (create-only reference data)
#[derive(Clone)]
pub struct LocationService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl LocationService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Inserts a new uniquely named location and returns the stored row.
    #[instrument(skip(self))]
    pub async fn create_location(&self, name: &str) -> Result<location::Model, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::ValidationError(
                "location name must not be empty".into(),
            ));
        }

        let db = self.db_pool.as_ref();

        let created = location::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ServiceError::Conflict(format!("location '{}' already exists", name))
            }
            _ => ServiceError::db_error(e),
        })?;

        self.event_sender
            .send_best_effort(Event::LocationCreated {
                id: created.id,
                name: created.name.clone(),
            })
            .await;

        Ok(created)
    }

    /// All locations, most recently created first.
    pub async fn list_locations(&self) -> Result<Vec<location::Model>, ServiceError> {
        let db = self.db_pool.as_ref();

        Location::find()
            .order_by_desc(location::Column::Id)
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }
}
