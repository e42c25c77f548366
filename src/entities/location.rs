use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A physical or logical place holding inventory. Created once, never
/// mutated or deleted; `name` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
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
