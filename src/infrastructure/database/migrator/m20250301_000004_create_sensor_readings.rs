//! Create sensor_readings table

use sea_orm_migration::prelude::*;

use super::m20250301_000003_create_sensors::Sensors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SensorReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SensorReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SensorReadings::SensorId).integer().not_null())
                    .col(ColumnDef::new(SensorReadings::Value).double().not_null())
                    .col(
                        ColumnDef::new(SensorReadings::IsAbnormal)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SensorReadings::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sensor_readings_sensor")
                            .from(SensorReadings::Table, SensorReadings::SensorId)
                            .to(Sensors::Table, Sensors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sensor_readings_sensor_recorded")
                    .table(SensorReadings::Table)
                    .col(SensorReadings::SensorId)
                    .col(SensorReadings::RecordedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SensorReadings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SensorReadings {
    Table,
    Id,
    SensorId,
    Value,
    IsAbnormal,
    RecordedAt,
}
