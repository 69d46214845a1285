use thiserror::Error;

/// Domain-level error taxonomy.
///
/// Store failures are mapped to [`DomainError::Internal`] at the repository
/// boundary; driver detail is logged there and never carried in the error
/// value.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    Unauthorized,

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Internal storage error")]
    Internal,
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
