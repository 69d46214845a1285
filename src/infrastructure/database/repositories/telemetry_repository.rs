//! Telemetry queries backed by sea-orm

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::domain::{
    DomainError, DomainResult, Elevator, ElevatorStatus, SensorKind, SensorReading,
    TelemetryRepository,
};
use crate::infrastructure::database::entities::{elevator, latest_reading};
use crate::infrastructure::database::ConnectionManager;

pub struct SeaOrmTelemetryRepository {
    manager: Arc<ConnectionManager>,
}

impl SeaOrmTelemetryRepository {
    pub fn new(manager: Arc<ConnectionManager>) -> Self {
        Self { manager }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn elevator_model_to_domain(model: elevator::Model) -> Elevator {
    Elevator {
        id: model.id,
        name: model.name,
        location: model.location,
        status: ElevatorStatus::from(model.status),
        last_maintenance: model.last_maintenance,
    }
}

fn reading_model_to_domain(model: latest_reading::Model) -> SensorReading {
    SensorReading {
        sensor_id: model.sensor_id,
        kind: SensorKind::from(model.sensor_type.as_str()),
        value: model.value,
        is_abnormal: model.is_abnormal,
        // A projection row without a timestamp is treated as observed now.
        timestamp: model.recorded_at.unwrap_or_else(Utc::now),
    }
}

fn storage_err(e: impl std::fmt::Display) -> DomainError {
    error!("Storage error: {}", e);
    DomainError::Internal
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl TelemetryRepository for SeaOrmTelemetryRepository {
    async fn list_elevators(&self) -> DomainResult<Vec<Elevator>> {
        let db = self.manager.ensure_live().await.map_err(storage_err)?;

        let models = elevator::Entity::find()
            .all(&db)
            .await
            .map_err(storage_err)?;

        Ok(models.into_iter().map(elevator_model_to_domain).collect())
    }

    async fn find_elevator(&self, id: i32) -> DomainResult<Option<Elevator>> {
        let db = self.manager.ensure_live().await.map_err(storage_err)?;

        let model = elevator::Entity::find_by_id(id)
            .one(&db)
            .await
            .map_err(storage_err)?;

        Ok(model.map(elevator_model_to_domain))
    }

    async fn latest_readings(&self, elevator_id: i32) -> DomainResult<Vec<SensorReading>> {
        let db = self.manager.ensure_live().await.map_err(storage_err)?;

        let models = latest_reading::Entity::find()
            .filter(latest_reading::Column::ElevatorId.eq(elevator_id))
            .order_by_asc(latest_reading::Column::SensorId)
            .all(&db)
            .await
            .map_err(storage_err)?;

        if models.is_empty() {
            return Err(DomainError::NotFound {
                entity: "SensorReading",
                field: "elevator_id",
                value: elevator_id.to_string(),
            });
        }

        Ok(models.into_iter().map(reading_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::{sensor, sensor_reading};
    use crate::infrastructure::database::repositories::test_support::open_migrated;
    use chrono::Duration;
    use sea_orm::{ActiveModelTrait, Set};

    async fn seed_elevator(
        db: &sea_orm::DatabaseConnection,
        name: &str,
        status: &str,
    ) -> elevator::Model {
        elevator::ActiveModel {
            name: Set(name.to_string()),
            location: Set("Building A".to_string()),
            status: Set(status.to_string()),
            last_maintenance: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn seed_sensor(
        db: &sea_orm::DatabaseConnection,
        elevator_id: i32,
        kind: &str,
    ) -> sensor::Model {
        sensor::ActiveModel {
            elevator_id: Set(elevator_id),
            sensor_type: Set(kind.to_string()),
            max_value: Set(100.0),
            min_value: Set(0.0),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn seed_reading(
        db: &sea_orm::DatabaseConnection,
        sensor_id: i32,
        value: f64,
        is_abnormal: bool,
        age: Duration,
    ) {
        sensor_reading::ActiveModel {
            sensor_id: Set(sensor_id),
            value: Set(value),
            is_abnormal: Set(is_abnormal),
            recorded_at: Set(Utc::now() - age),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn list_is_empty_on_fresh_store() {
        let manager = open_migrated().await;
        let repo = SeaOrmTelemetryRepository::new(manager);

        assert!(repo.list_elevators().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_all_rows() {
        let manager = open_migrated().await;
        let db = manager.ensure_live().await.unwrap();
        seed_elevator(&db, "Lift 1", "running").await;
        seed_elevator(&db, "Lift 2", "maintenance").await;

        let repo = SeaOrmTelemetryRepository::new(manager);
        let elevators = repo.list_elevators().await.unwrap();
        assert_eq!(elevators.len(), 2);
        assert!(elevators
            .iter()
            .any(|e| e.status == ElevatorStatus::Maintenance));
    }

    #[tokio::test]
    async fn missing_elevator_is_none_not_error() {
        let manager = open_migrated().await;
        let repo = SeaOrmTelemetryRepository::new(manager);

        assert!(repo.find_elevator(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_elevator_parses_status() {
        let manager = open_migrated().await;
        let db = manager.ensure_live().await.unwrap();
        let seeded = seed_elevator(&db, "Lift 1", "fault").await;

        let repo = SeaOrmTelemetryRepository::new(manager);
        let found = repo.find_elevator(seeded.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Lift 1");
        assert_eq!(found.status, ElevatorStatus::Fault);
    }

    #[tokio::test]
    async fn readings_for_unknown_elevator_are_not_found() {
        let manager = open_migrated().await;
        let repo = SeaOrmTelemetryRepository::new(manager);

        let err = repo.latest_readings(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn latest_readings_take_newest_per_sensor_ordered_by_id() {
        let manager = open_migrated().await;
        let db = manager.ensure_live().await.unwrap();

        let lift = seed_elevator(&db, "Lift 1", "running").await;
        let temp = seed_sensor(&db, lift.id, "temperature").await;
        let vib = seed_sensor(&db, lift.id, "vibration").await;

        // Two readings per sensor; only the newest must surface.
        seed_reading(&db, temp.id, 20.0, false, Duration::minutes(10)).await;
        seed_reading(&db, temp.id, 130.0, true, Duration::minutes(1)).await;
        seed_reading(&db, vib.id, 0.4, false, Duration::minutes(5)).await;
        seed_reading(&db, vib.id, 0.2, false, Duration::minutes(2)).await;

        let repo = SeaOrmTelemetryRepository::new(manager);
        let readings = repo.latest_readings(lift.id).await.unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].sensor_id, temp.id);
        assert_eq!(readings[0].value, 130.0);
        assert!(readings[0].is_abnormal);
        assert_eq!(readings[0].kind, SensorKind::Temperature);
        assert_eq!(readings[1].sensor_id, vib.id);
        assert_eq!(readings[1].value, 0.2);
        assert!(!readings[1].is_abnormal);
    }

    #[tokio::test]
    async fn readings_are_scoped_to_the_requested_elevator() {
        let manager = open_migrated().await;
        let db = manager.ensure_live().await.unwrap();

        let lift_a = seed_elevator(&db, "Lift A", "running").await;
        let lift_b = seed_elevator(&db, "Lift B", "running").await;
        let sensor_a = seed_sensor(&db, lift_a.id, "speed").await;
        let sensor_b = seed_sensor(&db, lift_b.id, "speed").await;
        seed_reading(&db, sensor_a.id, 1.5, false, Duration::minutes(1)).await;
        seed_reading(&db, sensor_b.id, 2.5, false, Duration::minutes(1)).await;

        let repo = SeaOrmTelemetryRepository::new(manager);
        let readings = repo.latest_readings(lift_a.id).await.unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].sensor_id, sensor_a.id);
    }
}
