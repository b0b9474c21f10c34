//! User infrastructure module
//!
//! Store implementations for user documents and Argon2 password hashing.

mod in_memory;
mod password;
mod postgres_store;

pub use in_memory::InMemoryUserStore;
pub use password::Argon2Hasher;
pub use postgres_store::{PostgresUserStore, USER_COLLECTION};

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::{DomainError, User, UserId};

fn parse_id(id: &str) -> Result<UserId, DomainError> {
    UserId::parse(id).inspect_err(|e| warn!(error = %e, "Rejected user id"))
}

fn user_not_found(id: &UserId) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", id))
}

fn document_to_user(document: &Value) -> Result<User, DomainError> {
    User::deserialize(document)
        .map_err(|e| DomainError::storage(format!("Failed to deserialize user: {}", e)))
}
