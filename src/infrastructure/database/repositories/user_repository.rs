//! Credential store backed by sea-orm

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use tracing::error;

use crate::auth::password::{hash_password, verify_password};
use crate::domain::{CredentialStore, DomainError, DomainResult, NewUser, User, UserRole};
use crate::infrastructure::database::entities::user;
use crate::infrastructure::database::ConnectionManager;

pub struct SeaOrmCredentialStore {
    manager: Arc<ConnectionManager>,
}

impl SeaOrmCredentialStore {
    pub fn new(manager: Arc<ConnectionManager>) -> Self {
        Self { manager }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Admin => UserRole::Admin,
        user::UserRole::Operator => UserRole::Operator,
        user::UserRole::User => UserRole::User,
    }
}

fn domain_role_to_entity(role: &UserRole) -> user::UserRole {
    match role {
        UserRole::Admin => user::UserRole::Admin,
        UserRole::Operator => user::UserRole::Operator,
        UserRole::User => user::UserRole::User,
    }
}

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        role: entity_role_to_domain(model.role),
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}

/// Log the driver error and surface only a generic failure indicator.
fn storage_err(e: impl std::fmt::Display) -> DomainError {
    error!("Storage error: {}", e);
    DomainError::Internal
}

fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let msg = e.to_string();
    msg.contains("UNIQUE") || msg.contains("Duplicate") || msg.contains("duplicate")
}

// ── Credential store implementation ─────────────────────────────

#[async_trait]
impl CredentialStore for SeaOrmCredentialStore {
    async fn register(&self, new_user: NewUser) -> DomainResult<()> {
        // Callers pre-validate; reject empty input here as well.
        let username = new_user.username.trim();
        if username.is_empty() {
            return Err(DomainError::Validation("username must not be empty".into()));
        }
        if new_user.password.trim().is_empty() {
            return Err(DomainError::Validation("password must not be empty".into()));
        }

        let db = self.manager.ensure_live().await.map_err(storage_err)?;

        let password_hash = hash_password(&new_user.password).map_err(|e| {
            error!("Failed to hash password: {}", e);
            DomainError::Internal
        })?;

        // Existence check and insert commit as one unit so a failure
        // in between leaves no partial row visible.
        let txn = db.begin().await.map_err(storage_err)?;

        let existing = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&txn)
            .await
            .map_err(storage_err)?;

        if existing.is_some() {
            return Err(DomainError::AlreadyExists(username.to_string()));
        }

        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(username.to_string()),
            role: Set(domain_role_to_entity(&new_user.role)),
            password_hash: Set(password_hash),
            created_at: Set(now),
        };

        model.insert(&txn).await.map_err(|e| {
            // A race past the existence check lands on the unique index.
            if is_unique_violation(&e) {
                DomainError::AlreadyExists(username.to_string())
            } else {
                storage_err(e)
            }
        })?;

        txn.commit().await.map_err(storage_err)?;
        Ok(())
    }

    async fn authenticate(&self, username: &str, password: &str) -> DomainResult<User> {
        let db = self.manager.ensure_live().await.map_err(storage_err)?;

        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&db)
            .await
            .map_err(storage_err)?;

        let Some(model) = model else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "username",
                value: username.to_string(),
            });
        };

        let matches = verify_password(password, &model.password_hash).map_err(storage_err)?;
        if !matches {
            return Err(DomainError::Unauthorized);
        }

        Ok(user_model_to_domain(model))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let db = self.manager.ensure_live().await.map_err(storage_err)?;

        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&db)
            .await
            .map_err(storage_err)?;

        Ok(model.map(user_model_to_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::repositories::test_support::open_migrated;

    fn alice() -> NewUser {
        NewUser {
            username: "alice".to_string(),
            role: UserRole::User,
            password: "Secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_authenticate_round_trips() {
        let manager = open_migrated().await;
        let store = SeaOrmCredentialStore::new(manager);

        store.register(alice()).await.unwrap();

        let user = store.authenticate("alice", "Secret123").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, UserRole::User);
        assert_ne!(user.password_hash, "Secret123");

        // The persisted id is stable across lookups.
        let found = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized_not_missing() {
        let manager = open_migrated().await;
        let store = SeaOrmCredentialStore::new(manager);

        store.register(alice()).await.unwrap();

        let err = store.authenticate("alice", "wrong").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let manager = open_migrated().await;
        let store = SeaOrmCredentialStore::new(manager);

        let err = store.authenticate("bob", "x").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "User",
                field: "username",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let manager = open_migrated().await;
        let store = SeaOrmCredentialStore::new(manager);

        store.register(alice()).await.unwrap();

        // Role and password differences do not matter; the name is taken.
        let again = NewUser {
            username: "alice".to_string(),
            role: UserRole::Admin,
            password: "Other456".to_string(),
        };
        let err = store.register(again).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(name) if name == "alice"));
    }

    #[tokio::test]
    async fn empty_input_is_rejected() {
        let manager = open_migrated().await;
        let store = SeaOrmCredentialStore::new(manager);

        let blank_name = NewUser {
            username: "   ".to_string(),
            role: UserRole::User,
            password: "Secret123".to_string(),
        };
        assert!(matches!(
            store.register(blank_name).await.unwrap_err(),
            DomainError::Validation(_)
        ));

        let blank_password = NewUser {
            username: "carol".to_string(),
            role: UserRole::User,
            password: "".to_string(),
        };
        assert!(matches!(
            store.register(blank_password).await.unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
