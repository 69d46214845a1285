//! Create elevators table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Elevators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Elevators::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Elevators::Name).string().not_null())
                    .col(ColumnDef::new(Elevators::Location).string().not_null())
                    .col(
                        ColumnDef::new(Elevators::Status)
                            .string()
                            .not_null()
                            .default("unknown"),
                    )
                    .col(ColumnDef::new(Elevators::LastMaintenance).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Elevators::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Elevators {
    Table,
    Id,
    Name,
    Location,
    Status,
    LastMaintenance,
}
