//! User store trait

use async_trait::async_trait;

use super::entity::{NewUser, User};
use super::params::UpdateUserParams;
use crate::domain::DomainError;

/// Persistence contract for user documents
///
/// Identifiers arrive as the raw strings taken from the request path. Every
/// implementation parses them with [`UserId::parse`](super::UserId::parse)
/// before touching the database, so a malformed id is reported as
/// [`DomainError::InvalidId`] and never as [`DomainError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a single user, `NotFound` if no document has this id
    async fn get_user_by_id(&self, id: &str) -> Result<User, DomainError>;

    /// Fetch every user; an empty store yields an empty vec
    async fn get_users(&self) -> Result<Vec<User>, DomainError>;

    /// Insert a new document and return it with its assigned id
    async fn create_user(&self, user: NewUser) -> Result<User, DomainError>;

    /// Delete a user, `NotFound` unless exactly one document was removed
    async fn delete_user(&self, id: &str) -> Result<(), DomainError>;

    /// Overwrite the supplied fields, `NotFound` if no document matched
    async fn put_user(&self, id: &str, params: UpdateUserParams) -> Result<(), DomainError>;
}
