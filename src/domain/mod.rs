pub mod elevator;
pub mod error;
pub mod user;

// Re-export commonly used types
pub use elevator::{Elevator, ElevatorStatus, Sensor, SensorKind, SensorReading, TelemetryRepository};
pub use error::{DomainError, DomainResult};
pub use user::{CredentialStore, NewUser, User, UserRole};
