//! Create the v_latest_sensor_data view
//!
//! One row per sensor: its newest reading joined with the sensor's kind and
//! owning elevator. Newest is decided by recorded_at with the row id as
//! tiebreaker so the projection stays deterministic.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CREATE_VIEW: &str = r#"
CREATE VIEW v_latest_sensor_data AS
SELECT
    s.id          AS sensor_id,
    s.elevator_id AS elevator_id,
    s.sensor_type AS sensor_type,
    r.value       AS value,
    r.is_abnormal AS is_abnormal,
    r.recorded_at AS recorded_at
FROM sensors s
JOIN sensor_readings r ON r.id = (
    SELECT r2.id
    FROM sensor_readings r2
    WHERE r2.sensor_id = s.id
    ORDER BY r2.recorded_at DESC, r2.id DESC
    LIMIT 1
)
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_VIEW)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW v_latest_sensor_data")
            .await?;
        Ok(())
    }
}
