use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A trackable item type with an optional unit of measure (empty string when
/// none was given). Same create-only lifecycle as locations.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub unit: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::location_material::Entity")]
    LocationMaterial,
}

impl Related<super::location_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationMaterial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
