//! User domain entity

use chrono::{DateTime, Utc};

/// User role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Operator,
    User,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::User
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Operator => write!(f, "operator"),
            Self::User => write!(f, "user"),
        }
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Self::Admin,
            "operator" => Self::Operator,
            _ => Self::User,
        }
    }
}

/// Registered user. Immutable after registration within this core.
#[derive(Clone, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: UserRole,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration input for [`CredentialStore::register`].
///
/// [`CredentialStore::register`]: super::CredentialStore::register
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub role: UserRole,
    pub password: String,
}
