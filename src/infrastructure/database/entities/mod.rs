//! Database entities

pub mod elevator;
pub mod latest_reading;
pub mod sensor;
pub mod sensor_reading;
pub mod user;
