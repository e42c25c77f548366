use crate::{
    db::DbPool,
    entities::{
        location,
        location_material::{self, Entity as LocationMaterial},
        material,
        stock_transaction::{self, Entity as StockTransaction, TransactionType},
    },
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionError, TransactionTrait,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

/// One balance row joined with its material, as returned by the full listing.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct BalanceRow {
    pub id: i32,
    pub location_id: i32,
    pub material_id: i32,
    pub material_name: String,
    pub quantity: i32,
    pub unit: String,
}

/// Balance row scoped to a single location.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct LocationBalanceRow {
    pub material_id: i32,
    pub material_name: String,
    pub quantity: i32,
    pub unit: String,
}

/// Ledger row joined with the material and both location roles. Joined names
/// are null when the referenced row is missing, never an error.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct TransactionRow {
    pub id: i32,
    pub material_id: i32,
    pub material_name: Option<String>,
    pub from_location_id: Option<i32>,
    pub from_location: Option<String>,
    pub to_location_id: Option<i32>,
    pub to_location: Option<String>,
    pub quantity: i32,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub created_at: DateTime<Utc>,
}

/// Service for the inventory ledger: balance mutations and listings.
///
/// Every mutating operation runs inside a single database transaction so the
/// balance upsert and the ledger append commit or roll back together.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
    event_sender: EventSender,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: EventSender) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Adds stock at a location, creating the balance row on first addition,
    /// and appends an `add` ledger entry.
    #[instrument(skip(self))]
    pub async fn add_stock(
        &self,
        location_id: i32,
        material_id: i32,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        check_quantity(quantity)?;

        let db = self.db_pool.as_ref();

        db.transaction::<_, (), ServiceError>(move |txn| {
            Box::pin(async move {
                upsert_balance(txn, location_id, material_id, quantity).await?;

                stock_transaction::ActiveModel {
                    material_id: Set(material_id),
                    from_location_id: Set(None),
                    to_location_id: Set(Some(location_id)),
                    quantity: Set(quantity),
                    r#type: Set(TransactionType::Add.as_str().to_string()),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)?;

                Ok(())
            })
        })
        .await
        .map_err(unwrap_transaction_error)?;

        self.event_sender
            .send_best_effort(Event::StockAdded {
                location_id,
                material_id,
                quantity,
            })
            .await;

        Ok(())
    }

    /// Moves stock between two locations. The source decrement is guarded by
    /// the on-hand quantity, so a concurrent transfer cannot overdraw it; an
    /// insufficient source rolls the whole transaction back.
    #[instrument(skip(self))]
    pub async fn transfer_stock(
        &self,
        from_location_id: i32,
        to_location_id: i32,
        material_id: i32,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        check_quantity(quantity)?;

        let db = self.db_pool.as_ref();

        db.transaction::<_, (), ServiceError>(move |txn| {
            Box::pin(async move {
                decrement_balance(txn, from_location_id, material_id, quantity).await?;
                upsert_balance(txn, to_location_id, material_id, quantity).await?;

                stock_transaction::ActiveModel {
                    material_id: Set(material_id),
                    from_location_id: Set(Some(from_location_id)),
                    to_location_id: Set(Some(to_location_id)),
                    quantity: Set(quantity),
                    r#type: Set(TransactionType::Transfer.as_str().to_string()),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)?;

                Ok(())
            })
        })
        .await
        .map_err(unwrap_transaction_error)?;

        self.event_sender
            .send_best_effort(Event::StockTransferred {
                from_location_id,
                to_location_id,
                material_id,
                quantity,
            })
            .await;

        Ok(())
    }

    /// Removes stock from a location without a destination, appending a
    /// `remove` ledger entry. Same sufficiency contract as the transfer
    /// source.
    #[instrument(skip(self))]
    pub async fn remove_stock(
        &self,
        location_id: i32,
        material_id: i32,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        check_quantity(quantity)?;

        let db = self.db_pool.as_ref();

        db.transaction::<_, (), ServiceError>(move |txn| {
            Box::pin(async move {
                decrement_balance(txn, location_id, material_id, quantity).await?;

                stock_transaction::ActiveModel {
                    material_id: Set(material_id),
                    from_location_id: Set(Some(location_id)),
                    to_location_id: Set(None),
                    quantity: Set(quantity),
                    r#type: Set(TransactionType::Remove.as_str().to_string()),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)?;

                Ok(())
            })
        })
        .await
        .map_err(unwrap_transaction_error)?;

        self.event_sender
            .send_best_effort(Event::StockRemoved {
                location_id,
                material_id,
                quantity,
            })
            .await;

        Ok(())
    }

    /// Every balance row joined with its material.
    pub async fn list_all_balances(&self) -> Result<Vec<BalanceRow>, ServiceError> {
        let db = self.db_pool.as_ref();

        LocationMaterial::find()
            .select_only()
            .column(location_material::Column::Id)
            .column(location_material::Column::LocationId)
            .column(location_material::Column::MaterialId)
            .column_as(material::Column::Name, "material_name")
            .column(location_material::Column::Quantity)
            .column_as(material::Column::Unit, "unit")
            .join(JoinType::InnerJoin, location_material::Relation::Material.def())
            .into_model::<BalanceRow>()
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }

    /// Balance rows for one location, joined with material name and unit.
    pub async fn balances_for_location(
        &self,
        location_id: i32,
    ) -> Result<Vec<LocationBalanceRow>, ServiceError> {
        let db = self.db_pool.as_ref();

        LocationMaterial::find()
            .select_only()
            .column(location_material::Column::MaterialId)
            .column_as(material::Column::Name, "material_name")
            .column(location_material::Column::Quantity)
            .column_as(material::Column::Unit, "unit")
            .join(JoinType::InnerJoin, location_material::Relation::Material.def())
            .filter(location_material::Column::LocationId.eq(location_id))
            .into_model::<LocationBalanceRow>()
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }

    /// The full ledger, newest first, left-joined with the material and the
    /// from/to locations.
    pub async fn list_transactions(&self) -> Result<Vec<TransactionRow>, ServiceError> {
        let db = self.db_pool.as_ref();

        let from_alias = Alias::new("from_loc");
        let to_alias = Alias::new("to_loc");

        StockTransaction::find()
            .select_only()
            .column(stock_transaction::Column::Id)
            .column(stock_transaction::Column::MaterialId)
            .column_as(material::Column::Name, "material_name")
            .column(stock_transaction::Column::FromLocationId)
            .column_as(
                Expr::col((from_alias.clone(), location::Column::Name)),
                "from_location",
            )
            .column(stock_transaction::Column::ToLocationId)
            .column_as(
                Expr::col((to_alias.clone(), location::Column::Name)),
                "to_location",
            )
            .column(stock_transaction::Column::Quantity)
            .column_as(stock_transaction::Column::Type, "transaction_type")
            .column(stock_transaction::Column::CreatedAt)
            .join(JoinType::LeftJoin, stock_transaction::Relation::Material.def())
            .join_as(
                JoinType::LeftJoin,
                stock_transaction::Relation::FromLocation.def(),
                from_alias,
            )
            .join_as(
                JoinType::LeftJoin,
                stock_transaction::Relation::ToLocation.def(),
                to_alias,
            )
            .order_by_desc(stock_transaction::Column::Id)
            .into_model::<TransactionRow>()
            .all(db)
            .await
            .map_err(ServiceError::db_error)
    }
}

fn check_quantity(quantity: i32) -> Result<(), ServiceError> {
    if quantity <= 0 {
        return Err(ServiceError::ValidationError(
            "quantity must be a positive integer".into(),
        ));
    }
    Ok(())
}

fn unwrap_transaction_error(e: TransactionError<ServiceError>) -> ServiceError {
    match e {
        TransactionError::Connection(db_err) => ServiceError::db_error(db_err),
        TransactionError::Transaction(service_err) => service_err,
    }
}

/// Insert-or-increment the balance row for (location, material) inside the
/// caller's transaction.
async fn upsert_balance(
    txn: &DatabaseTransaction,
    location_id: i32,
    material_id: i32,
    delta: i32,
) -> Result<(), ServiceError> {
    let existing = LocationMaterial::find()
        .filter(location_material::Column::LocationId.eq(location_id))
        .filter(location_material::Column::MaterialId.eq(material_id))
        .one(txn)
        .await
        .map_err(ServiceError::db_error)?;

    match existing {
        Some(balance) => {
            let quantity = balance.quantity + delta;
            let mut active: location_material::ActiveModel = balance.into();
            active.quantity = Set(quantity);
            active.update(txn).await.map_err(ServiceError::db_error)?;
        }
        None => {
            location_material::ActiveModel {
                location_id: Set(location_id),
                material_id: Set(material_id),
                quantity: Set(delta),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(ServiceError::db_error)?;
        }
    }

    Ok(())
}

/// Decrement guarded by the on-hand quantity: the UPDATE only matches when
/// `quantity >= delta`, so an absent or too-small balance affects zero rows
/// and the operation aborts without overdrawing the source.
async fn decrement_balance(
    txn: &DatabaseTransaction,
    location_id: i32,
    material_id: i32,
    delta: i32,
) -> Result<(), ServiceError> {
    let result = LocationMaterial::update_many()
        .col_expr(
            location_material::Column::Quantity,
            Expr::col(location_material::Column::Quantity).sub(delta),
        )
        .filter(location_material::Column::LocationId.eq(location_id))
        .filter(location_material::Column::MaterialId.eq(material_id))
        .filter(location_material::Column::Quantity.gte(delta))
        .exec(txn)
        .await
        .map_err(ServiceError::db_error)?;

    if result.rows_affected == 0 {
        return Err(ServiceError::InsufficientStock);
    }

    Ok(())
}
