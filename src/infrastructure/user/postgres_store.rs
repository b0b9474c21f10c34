//! PostgreSQL user store
//!
//! Users are stored as JSONB documents keyed by their UUID. Partial updates
//! merge the supplied fields into the stored document with `||`.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::Row;
use sqlx::postgres::PgRow;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, NewUser, UpdateUserParams, User, UserId, UserStore};
use crate::infrastructure::storage::DocumentDatabase;

use super::{document_to_user, parse_id, user_not_found};

/// Collection (table) holding user documents
pub const USER_COLLECTION: &str = "users";

/// SQL text for every store operation against one collection
#[derive(Debug, Clone, PartialEq, Eq)]
struct UserQueries {
    select_one: String,
    select_all: String,
    insert: String,
    delete: String,
    update: String,
}

impl UserQueries {
    fn new(collection: &str) -> Self {
        Self {
            select_one: format!("SELECT data FROM {} WHERE key = $1", collection),
            select_all: format!("SELECT data FROM {} ORDER BY created_at, key", collection),
            insert: format!("INSERT INTO {} (key, data) VALUES ($1, $2)", collection),
            delete: format!("DELETE FROM {} WHERE key = $1", collection),
            update: format!(
                "UPDATE {} SET data = data || $2, updated_at = NOW() WHERE key = $1",
                collection
            ),
        }
    }
}

/// PostgreSQL implementation of UserStore
#[derive(Debug, Clone)]
pub struct PostgresUserStore {
    db: DocumentDatabase,
    collection: String,
    queries: UserQueries,
}

impl PostgresUserStore {
    /// Create a store over the default `users` collection
    pub fn new(db: DocumentDatabase) -> Self {
        Self::with_collection(db, USER_COLLECTION)
    }

    pub fn with_collection(db: DocumentDatabase, collection: impl Into<String>) -> Self {
        let collection = collection.into();

        Self {
            db,
            queries: UserQueries::new(&collection),
            collection,
        }
    }

    /// Make sure the backing collection exists
    pub async fn init(&self) -> Result<(), DomainError> {
        self.db.ensure_collection(&self.collection).await
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn get_user_by_id(&self, id: &str) -> Result<User, DomainError> {
        let user_id = parse_id(id)?;

        let row = sqlx::query(&self.queries.select_one)
            .bind(user_id.as_uuid())
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => {
                debug!(user_id = %user_id, "Fetched user");
                row_to_user(&row)
            }
            None => {
                warn!(user_id = %user_id, "User not found");
                Err(user_not_found(&user_id))
            }
        }
    }

    async fn get_users(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(&self.queries.select_all)
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        let user = user.with_id(UserId::generate());
        let data = serde_json::to_value(&user)
            .map_err(|e| DomainError::storage(format!("Failed to serialize user: {}", e)))?;

        sqlx::query(&self.queries.insert)
            .bind(user.id().as_uuid())
            .bind(&data)
            .execute(self.db.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create user: {}", e)))?;

        info!(user_id = %user.id(), "Created user");
        Ok(user)
    }

    async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        let user_id = parse_id(id)?;

        let result = sqlx::query(&self.queries.delete)
            .bind(user_id.as_uuid())
            .execute(self.db.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected() != 1 {
            warn!(user_id = %user_id, "Couldn't find user to delete");
            return Err(user_not_found(&user_id));
        }

        info!(user_id = %user_id, "Deleted user");
        Ok(())
    }

    async fn put_user(&self, id: &str, params: UpdateUserParams) -> Result<(), DomainError> {
        let user_id = parse_id(id)?;
        let patch = Value::Object(params.to_document());

        let result = sqlx::query(&self.queries.update)
            .bind(user_id.as_uuid())
            .bind(&patch)
            .execute(self.db.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            warn!(user_id = %user_id, "Did not update user");
            return Err(user_not_found(&user_id));
        }

        info!(user_id = %user_id, "Updated user");
        Ok(())
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let data: Value = row
        .try_get("data")
        .map_err(|e| DomainError::storage(format!("Failed to read user document: {}", e)))?;

    document_to_user(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_queries_use_collection_name() {
        let queries = UserQueries::new("guests");

        assert_eq!(queries.select_one, "SELECT data FROM guests WHERE key = $1");
        assert_eq!(
            queries.select_all,
            "SELECT data FROM guests ORDER BY created_at, key"
        );
        assert_eq!(
            queries.insert,
            "INSERT INTO guests (key, data) VALUES ($1, $2)"
        );
        assert_eq!(queries.delete, "DELETE FROM guests WHERE key = $1");
        assert!(queries.update.starts_with("UPDATE guests SET data = data || $2"));
        assert!(queries.update.ends_with("WHERE key = $1"));
    }

    #[test]
    fn test_default_collection_queries() {
        let queries = UserQueries::new(USER_COLLECTION);
        assert!(queries.select_one.contains("FROM users "));
    }

    #[test]
    fn test_document_to_user() {
        let id = UserId::generate();
        let document = json!({
            "id": id.to_string(),
            "first_name": "James",
            "last_name": "Foo",
            "email": "james@foo.com",
            "encrypted_password": "hash"
        });

        let user = document_to_user(&document).unwrap();

        assert_eq!(user.id(), &id);
        assert_eq!(user.first_name(), "James");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_malformed_document_is_storage_error() {
        let documents = [
            json!({ "first_name": "James" }),
            json!({ "id": "not-a-uuid", "first_name": "James", "last_name": "Foo",
                    "email": "james@foo.com", "encrypted_password": "hash" }),
            json!("just a string"),
        ];

        for document in documents {
            let err = document_to_user(&document).unwrap_err();
            assert!(matches!(err, DomainError::Storage { .. }), "{document}");
        }
    }

    #[test]
    fn test_update_patch_only_carries_supplied_fields() {
        let params = UpdateUserParams {
            first_name: None,
            last_name: Some("Bar".to_string()),
        };

        let patch = Value::Object(params.to_document());
        assert_eq!(patch, json!({ "last_name": "Bar" }));
    }
}
