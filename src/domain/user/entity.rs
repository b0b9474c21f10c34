//! User entity and related types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::params::CreateUserParams;
use super::password::PasswordHasher;
use crate::domain::DomainError;

/// User identifier - the store's native document key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh identifier for a document about to be inserted
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an externally supplied identifier
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        Uuid::try_parse(id)
            .map(Self)
            .map_err(|e| DomainError::invalid_id(format!("'{}' is not a valid user id: {}", id, e)))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated user that has not been persisted yet
///
/// Carries everything a [`User`] has except the identifier, which only the
/// store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    first_name: String,
    last_name: String,
    email: String,
    encrypted_password: String,
    is_admin: bool,
}

impl NewUser {
    /// Validate creation params and build a new user, hashing the plaintext
    /// password
    ///
    /// Fails with [`DomainError::Validation`] carrying every failing field.
    pub fn from_params(
        params: CreateUserParams,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, DomainError> {
        let errors = params.validation_errors();
        if !errors.is_empty() {
            return Err(DomainError::validation(errors));
        }

        let encrypted_password = hasher.hash(&params.password)?;

        Ok(Self {
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            encrypted_password,
            is_admin: false,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Attach the store-assigned identifier
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            encrypted_password: self.encrypted_password,
            is_admin: self.is_admin,
        }
    }
}

/// Persisted user document
///
/// The serialized form is the stored document, so it includes the encrypted
/// password. HTTP responses go through a dedicated response type instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    encrypted_password: String,
    #[serde(default)]
    is_admin: bool,
}

impl User {
    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn encrypted_password(&self) -> &str {
        &self.encrypted_password
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
