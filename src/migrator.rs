use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_locations_table::Migration),
            Box::new(m20240301_000002_create_materials_table::Migration),
            Box::new(m20240301_000003_create_location_materials_table::Migration),
            Box::new(m20240301_000004_create_stock_transactions_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_locations_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_locations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Locations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Locations::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Locations::Name).string().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_locations_name")
                        .table(Locations::Table)
                        .col(Locations::Name)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Locations::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Locations {
        Table,
        Id,
        Name,
    }
}

mod m20240301_000002_create_materials_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_materials_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Materials::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Materials::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Materials::Name).string().not_null())
                        .col(
                            ColumnDef::new(Materials::Unit)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_materials_name")
                        .table(Materials::Table)
                        .col(Materials::Name)
                        .unique()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Materials::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum Materials {
        Table,
        Id,
        Name,
        Unit,
    }
}

mod m20240301_000003_create_location_materials_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_location_materials_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(LocationMaterials::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(LocationMaterials::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(LocationMaterials::LocationId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(LocationMaterials::MaterialId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(LocationMaterials::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_location_materials_location")
                                .from(LocationMaterials::Table, LocationMaterials::LocationId)
                                .to(
                                    super::m20240301_000001_create_locations_table::Locations::Table,
                                    super::m20240301_000001_create_locations_table::Locations::Id,
                                ),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_location_materials_material")
                                .from(LocationMaterials::Table, LocationMaterials::MaterialId)
                                .to(
                                    super::m20240301_000002_create_materials_table::Materials::Table,
                                    super::m20240301_000002_create_materials_table::Materials::Id,
                                ),
                        )
                        .to_owned(),
                )
                .await?;

            // One balance row per (location, material) pair
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_location_materials_pair")
                        .table(LocationMaterials::Table)
                        .col(LocationMaterials::LocationId)
                        .col(LocationMaterials::MaterialId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_location_materials_location_id")
                        .table(LocationMaterials::Table)
                        .col(LocationMaterials::LocationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(LocationMaterials::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum LocationMaterials {
        Table,
        Id,
        LocationId,
        MaterialId,
        Quantity,
    }
}

mod m20240301_000004_create_stock_transactions_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_stock_transactions_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(StockTransactions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StockTransactions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(StockTransactions::MaterialId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StockTransactions::FromLocationId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(StockTransactions::ToLocationId)
                                .integer()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(StockTransactions::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StockTransactions::Type).string().not_null())
                        .col(
                            ColumnDef::new(StockTransactions::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stock_transactions_material")
                                .from(StockTransactions::Table, StockTransactions::MaterialId)
                                .to(
                                    super::m20240301_000002_create_materials_table::Materials::Table,
                                    super::m20240301_000002_create_materials_table::Materials::Id,
                                ),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stock_transactions_from_location")
                                .from(StockTransactions::Table, StockTransactions::FromLocationId)
                                .to(
                                    super::m20240301_000001_create_locations_table::Locations::Table,
                                    super::m20240301_000001_create_locations_table::Locations::Id,
                                ),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stock_transactions_to_location")
                                .from(StockTransactions::Table, StockTransactions::ToLocationId)
                                .to(
                                    super::m20240301_000001_create_locations_table::Locations::Table,
                                    super::m20240301_000001_create_locations_table::Locations::Id,
                                ),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stock_transactions_material_id")
                        .table(StockTransactions::Table)
                        .col(StockTransactions::MaterialId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stock_transactions_created_at")
                        .table(StockTransactions::Table)
                        .col(StockTransactions::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(StockTransactions::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    pub enum StockTransactions {
        Table,
        Id,
        MaterialId,
        FromLocationId,
        ToLocationId,
        Quantity,
        Type,
        CreatedAt,
    }
}
