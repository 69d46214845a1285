//! Authentication module
//!
//! Stateless session tokens and password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{create_token, verify_token, AuthError, Claims, JwtConfig};
pub use password::{hash_password, verify_password};
