//! sea-orm implementations of the domain repository interfaces

pub mod telemetry_repository;
pub mod user_repository;

pub use telemetry_repository::SeaOrmTelemetryRepository;
pub use user_repository::SeaOrmCredentialStore;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{ConnectionManager, DatabaseConfig};

    /// Open a manager against a throwaway SQLite file with the full schema
    /// applied. A file store keeps the data visible across pooled
    /// connections, unlike `sqlite::memory:`.
    pub async fn open_migrated() -> Arc<ConnectionManager> {
        let path = std::env::temp_dir().join(format!("elevator-test-{}.db", uuid::Uuid::new_v4()));
        let config = DatabaseConfig::sqlite(&path.display().to_string());

        let manager = ConnectionManager::open(config).await.unwrap();
        let db = manager.ensure_live().await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        Arc::new(manager)
    }
}
