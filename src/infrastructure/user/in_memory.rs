//! In-memory user store
//!
//! Keeps users as JSON documents so updates go through the same partial
//! document merge as the PostgreSQL store. Listing returns documents in
//! insertion order, as the PostgreSQL store orders by creation time.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, NewUser, UpdateUserParams, User, UserId, UserStore};

use super::{document_to_user, parse_id, user_not_found};

/// In-memory implementation of UserStore
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    collection: RwLock<Collection>,
}

#[derive(Debug, Default)]
struct Collection {
    documents: HashMap<UserId, Value>,
    order: Vec<UserId>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.collection.read().await.documents.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.collection.read().await.documents.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user_by_id(&self, id: &str) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;
        let collection = self.collection.read().await;

        match collection.documents.get(&user_id) {
            Some(document) => {
                debug!(user_id = %user_id, "Fetched user");
                document_to_user(document)
            }
            None => {
                warn!(user_id = %user_id, "User not found");
                Err(user_not_found(&user_id))
            }
        }
    }

    async fn get_users(&self) -> Result<Vec<User>, DomainError> {
        let collection = self.collection.read().await;

        collection
            .order
            .iter()
            .filter_map(|id| collection.documents.get(id))
            .map(document_to_user)
            .collect()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        let user = user.with_id(UserId::generate());
        let document = serde_json::to_value(&user)
            .map_err(|e| DomainError::storage(format!("Failed to serialize user: {}", e)))?;

        let mut collection = self.collection.write().await;
        collection.documents.insert(*user.id(), document);
        collection.order.push(*user.id());

        info!(user_id = %user.id(), "Created user");
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        let user_id = parse_id(id)?;

        let mut collection = self.collection.write().await;

        if collection.documents.remove(&user_id).is_none() {
            warn!(user_id = %user_id, "Couldn't find user to delete");
            return Err(user_not_found(&user_id));
        }
        collection.order.retain(|existing| existing != &user_id);

        info!(user_id = %user_id, "Deleted user");
        Ok(())
    }

    async fn put_user(&self, id: &str, params: UpdateUserParams) -> Result<(), DomainError> {
        let user_id = parse_id(id)?;
        let mut collection = self.collection.write().await;

        let Some(document) = collection.documents.get_mut(&user_id) else {
            warn!(user_id = %user_id, "Did not update user");
            return Err(user_not_found(&user_id));
        };

        merge_document(document, params.to_document())?;

        info!(user_id = %user_id, "Updated user");
        Ok(())
    }
}

/// Top-level merge, the same result as PostgreSQL's `jsonb || jsonb`
fn merge_document(document: &mut Value, patch: Map<String, Value>) -> Result<(), DomainError> {
    let Value::Object(fields) = document else {
        return Err(DomainError::storage("Stored user document is not an object"));
    };

    fields.extend(patch);
    Ok(())
}
