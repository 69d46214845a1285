//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users;
mod m20250301_000002_create_elevators;
mod m20250301_000003_create_sensors;
mod m20250301_000004_create_sensor_readings;
mod m20250301_000005_create_latest_readings_view;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users::Migration),
            Box::new(m20250301_000002_create_elevators::Migration),
            Box::new(m20250301_000003_create_sensors::Migration),
            Box::new(m20250301_000004_create_sensor_readings::Migration),
            Box::new(m20250301_000005_create_latest_readings_view::Migration),
        ]
    }
}
