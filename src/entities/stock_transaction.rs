use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// Types of stock transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Add,
    Transfer,
    Remove,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Add => "add",
            TransactionType::Transfer => "transfer",
            TransactionType::Remove => "remove",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(TransactionType::Add),
            "transfer" => Some(TransactionType::Transfer),
            "remove" => Some(TransactionType::Remove),
            _ => None,
        }
    }
}

/// Immutable ledger entry for a stock-affecting event. `from_location_id` is
/// null for `add`, `to_location_id` is null for `remove`, both are set for
/// `transfer`. Rows are append-only; the balance table is their materialized
/// net effect.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub material_id: i32,
    pub from_location_id: Option<i32>,
    pub to_location_id: Option<i32>,
    pub quantity: i32,
    pub r#type: String, // stored as text, converted through TransactionType
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::MaterialId",
        to = "super::material::Column::Id"
    )]
    Material,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::FromLocationId",
        to = "super::location::Column::Id"
    )]
    FromLocation,
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::ToLocationId",
        to = "super::location::Column::Id"
    )]
    ToLocation,
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;
        if let ActiveValue::NotSet = active_model.created_at {
            active_model.created_at = Set(Utc::now());
        }
        Ok(active_model)
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionType;

    #[test]
    fn transaction_type_round_trips() {
        for ty in [
            TransactionType::Add,
            TransactionType::Transfer,
            TransactionType::Remove,
        ] {
            assert_eq!(TransactionType::from_str(ty.as_str()), Some(ty));
        }
        assert_eq!(TransactionType::from_str("ship"), None);
    }
}
