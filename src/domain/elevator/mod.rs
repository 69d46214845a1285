//! Elevator aggregate
//!
//! Equipment, sensors, latest readings, and the telemetry query interface.

pub mod model;
pub mod repository;

pub use model::{Elevator, ElevatorStatus, Sensor, SensorKind, SensorReading};
pub use repository::TelemetryRepository;
