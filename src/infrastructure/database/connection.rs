//! Connection lifecycle management
//!
//! Owns the link to the relational store and hands a live handle to every
//! repository operation. `sea_orm::DatabaseConnection` is an sqlx pool, so
//! concurrent callers each check out their own pooled connection; this
//! manager only guards the probe-and-reconnect transition so it runs
//! atomically.

use std::time::Duration;

use sea_orm::{Database, DatabaseConnection, DbErr};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use super::DatabaseConfig;

/// Upper bound on the liveness probe so a stalled link cannot hang callers.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure to establish or re-establish the store link.
#[derive(Debug, Error)]
#[error("Database connection failed: {0}")]
pub struct ConnectionError(#[from] pub DbErr);

/// Observable lifecycle state.
///
/// `Connected -> (probe fails) -> Reconnecting -> Connected | Failed`.
/// `Failed` is not terminal; the next [`ConnectionManager::ensure_live`]
/// call re-attempts from `Reconnecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connected,
    Reconnecting,
    Failed,
}

struct Inner {
    handle: Option<DatabaseConnection>,
    state: ConnectionState,
}

/// Health-checked handle to the relational store.
pub struct ConnectionManager {
    config: DatabaseConfig,
    inner: Mutex<Inner>,
}

impl ConnectionManager {
    /// Connect eagerly with the given configuration.
    pub async fn open(config: DatabaseConfig) -> Result<Self, ConnectionError> {
        let handle = Database::connect(&config.url).await?;
        info!("Database connected: {}", config.url);

        Ok(Self {
            config,
            inner: Mutex::new(Inner {
                handle: Some(handle),
                state: ConnectionState::Connected,
            }),
        })
    }

    /// Return a live handle, reconnecting once if the current one is gone
    /// or fails a round-trip probe. No retry loop; callers retry at the
    /// request boundary.
    pub async fn ensure_live(&self) -> Result<DatabaseConnection, ConnectionError> {
        let mut inner = self.inner.lock().await;

        if let Some(handle) = inner.handle.clone() {
            match tokio::time::timeout(PROBE_TIMEOUT, handle.ping()).await {
                Ok(Ok(())) => {
                    inner.state = ConnectionState::Connected;
                    return Ok(handle);
                }
                Ok(Err(e)) => warn!("Liveness probe failed: {}", e),
                Err(_) => warn!("Liveness probe timed out after {:?}", PROBE_TIMEOUT),
            }
        }

        inner.state = ConnectionState::Reconnecting;
        if let Some(stale) = inner.handle.take() {
            let _ = stale.close().await;
        }

        match Database::connect(&self.config.url).await {
            Ok(handle) => {
                info!("Database reconnected");
                inner.handle = Some(handle.clone());
                inner.state = ConnectionState::Connected;
                Ok(handle)
            }
            Err(e) => {
                error!("Database reconnect failed: {}", e);
                inner.state = ConnectionState::Failed;
                Err(e.into())
            }
        }
    }

    /// Release the handle. Idempotent; safe on an already-closed manager.
    pub async fn close(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(handle) = inner.handle.take() {
            if let Err(e) = handle.close().await {
                warn!("Error closing database connection: {}", e);
            }
            info!("Database connection closed");
        }
        inner.state = ConnectionState::Failed;
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> ConnectionState {
        self.inner.lock().await.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
        }
    }

    #[tokio::test]
    async fn open_yields_connected_state() {
        let manager = ConnectionManager::open(memory_config()).await.unwrap();
        assert_eq!(manager.state().await, ConnectionState::Connected);

        let handle = manager.ensure_live().await.unwrap();
        assert!(handle.ping().await.is_ok());
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let manager = ConnectionManager::open(memory_config()).await.unwrap();
        manager.close().await;
        manager.close().await;
        assert_eq!(manager.state().await, ConnectionState::Failed);
    }

    #[tokio::test]
    async fn ensure_live_reconnects_after_close() {
        let manager = ConnectionManager::open(memory_config()).await.unwrap();
        manager.close().await;

        let handle = manager.ensure_live().await.unwrap();
        assert!(handle.ping().await.is_ok());
        assert_eq!(manager.state().await, ConnectionState::Connected);
    }

    #[tokio::test]
    async fn open_fails_on_unreachable_store() {
        let config = DatabaseConfig {
            url: "sqlite:///nonexistent-dir/nope.db".to_string(),
        };
        assert!(ConnectionManager::open(config).await.is_err());
    }
}
