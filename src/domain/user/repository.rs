//! Credential store interface

use async_trait::async_trait;

use super::{NewUser, User};
use crate::domain::DomainResult;

/// Registration and authentication against the user store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Register a new user. Fails with `AlreadyExists` when the username is
    /// taken and `Validation` when username or password is empty after
    /// trimming.
    async fn register(&self, new_user: NewUser) -> DomainResult<()>;

    /// Verify a username/password pair. Unknown user yields `NotFound`,
    /// a wrong password `Unauthorized`.
    async fn authenticate(&self, username: &str, password: &str) -> DomainResult<User>;

    /// Existence check by username. Callers that time out during a
    /// `register` must re-check here before retrying.
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
}
