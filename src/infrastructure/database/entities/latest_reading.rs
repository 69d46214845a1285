//! Read model over the `v_latest_sensor_data` view
//!
//! The view yields the newest reading per sensor joined with the sensor's
//! kind and owning elevator. It is read-only; its upkeep belongs to the
//! storage side.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "v_latest_sensor_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sensor_id: i32,
    pub elevator_id: i32,
    pub sensor_type: String,
    pub value: f64,
    pub is_abnormal: bool,
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
