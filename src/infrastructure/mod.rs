pub mod database;

pub use database::{
    ConnectionError, ConnectionManager, ConnectionState, DatabaseConfig, SeaOrmCredentialStore,
    SeaOrmTelemetryRepository,
};
