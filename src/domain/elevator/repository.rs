//! Telemetry query interface

use async_trait::async_trait;

use super::{Elevator, SensorReading};
use crate::domain::DomainResult;

/// Read access to equipment records and the latest-reading projection.
#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// All elevators in store order. An empty store yields `Ok(vec![])`.
    async fn list_elevators(&self) -> DomainResult<Vec<Elevator>>;

    /// Single elevator by id. `Ok(None)` means the row is genuinely absent;
    /// a failed query surfaces as `Err`, never as `None`.
    async fn find_elevator(&self, id: i32) -> DomainResult<Option<Elevator>>;

    /// Latest reading per sensor for one elevator, ascending by sensor id.
    /// No matching sensors yields `NotFound`.
    async fn latest_readings(&self, elevator_id: i32) -> DomainResult<Vec<SensorReading>>;
}
