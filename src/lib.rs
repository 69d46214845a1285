//! # Elevator Monitoring Backend Core
//!
//! Data-access and authentication layer for the elevator monitoring system.
//! An external HTTP handler layer calls into this crate and translates the
//! domain error taxonomy into transport responses.
//!
//! ## Architecture
//!
//! - **domain**: entities, error taxonomy, and repository interfaces
//! - **auth**: stateless session tokens (JWT) and password hashing
//! - **infrastructure**: sea-orm store access behind a health-checked
//!   connection manager, entities, and migrations
//! - **config**: startup configuration, injected into every component

pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, init_tracing, AppConfig};

// Re-export the boundary types for easy access
pub use auth::{create_token, verify_token, AuthError, Claims, JwtConfig};
pub use domain::{
    CredentialStore, DomainError, DomainResult, Elevator, ElevatorStatus, NewUser, Sensor,
    SensorKind, SensorReading, TelemetryRepository, User, UserRole,
};
pub use infrastructure::{
    ConnectionError, ConnectionManager, ConnectionState, DatabaseConfig, SeaOrmCredentialStore,
    SeaOrmTelemetryRepository,
};
