//! Sensor entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sensor reference data: measurement kind and valid value range.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sensors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub elevator_id: i32,
    pub sensor_type: String,
    pub max_value: f64,
    pub min_value: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::elevator::Entity",
        from = "Column::ElevatorId",
        to = "super::elevator::Column::Id"
    )]
    Elevator,
    #[sea_orm(has_many = "super::sensor_reading::Entity")]
    Readings,
}

impl Related<super::elevator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Elevator.def()
    }
}

impl Related<super::sensor_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Readings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
