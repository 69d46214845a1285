//! Create sensors table

use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_elevators::Elevators;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sensors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sensors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sensors::ElevatorId).integer().not_null())
                    .col(ColumnDef::new(Sensors::SensorType).string().not_null())
                    .col(ColumnDef::new(Sensors::MaxValue).double().not_null())
                    .col(ColumnDef::new(Sensors::MinValue).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensors_elevator")
                            .from(Sensors::Table, Sensors::ElevatorId)
                            .to(Elevators::Table, Elevators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sensors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Sensors {
    Table,
    Id,
    ElevatorId,
    SensorType,
    MaxValue,
    MinValue,
}
