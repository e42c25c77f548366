use crate::{
    db::DbPool,
    entities::material::{self, Entity as Material},
    errors::ServiceError,
    events::{Event, EventSender},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};
use std::sync::Arc;
use tracing::instrument;

/// Service for managing materials (create-only reference data)
#[derive(Clone)]
pub struct MaterialService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl MaterialService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Inserts a new uniquely named material. A missing unit is stored as an
    /// empty string.
    #[instrument(skip(self))]
    pub async fn create_material(
        &self,
        name: &str,
        unit: Option<String>,
    ) -> Result<material::Model, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::ValidationError(
                "material name must not be empty".into(),
            ));
        }

        let db = self.db_pool.as_ref();

        let created = material::ActiveModel {
            name: Set(name.to_string()),
            unit: Set(unit.unwrap_or_default()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ServiceError::Conflict(format!("material '{}' already exists", name))
            }
            _ => ServiceError::db_error(e),
        })?;

        self.event_sender
            .send_best_effort(Event::MaterialCreated {
                id: created.id,
                name: created.name.clone(),
                unit: created.unit.clone(),
            })
            .await;

        Ok(created)
    }

    /// All materials, most recently created first.
    pub async fn list_materials(&self) -> Result<Vec<material::Model>, ServiceError> {
        let db = self.db_pool.as_ref();

        Material::find()
            .order_by_desc(material::Column::Id)
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }
}
