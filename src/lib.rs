//! Hotel reservation API
//!
//! User management over HTTP, persisted as JSON documents in PostgreSQL or
//! kept in memory for local runs.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use crate::config::StoreBackend;
use domain::UserStore;
use infrastructure::storage::DocumentDatabase;
use infrastructure::user::{Argon2Hasher, InMemoryUserStore, PostgresUserStore};
use tracing::info;

/// Create the application state for the configured backend
///
/// The database handle, when one was opened, is returned alongside so the
/// caller can close it after the server has drained.
pub async fn create_app_state_with_config(
    config: &AppConfig,
) -> anyhow::Result<(AppState, Option<DocumentDatabase>)> {
    let hasher = Arc::new(Argon2Hasher::new());

    match config.database.backend {
        StoreBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let database = DocumentDatabase::connect(&config.database.postgres()).await?;
            info!("PostgreSQL connection established");

            let store = PostgresUserStore::new(database.clone());
            store.init().await?;

            let user_store: Arc<dyn UserStore> = Arc::new(store);
            Ok((AppState::new(user_store, hasher), Some(database)))
        }
        StoreBackend::Memory => {
            info!("Using in-memory user store");
            let user_store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
            Ok((AppState::new(user_store, hasher), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_needs_no_database() {
        let mut config = AppConfig::default();
        config.database.backend = StoreBackend::Memory;

        let (state, database) = create_app_state_with_config(&config).await.unwrap();

        assert!(database.is_none());
        assert!(state.user_store.get_users().await.unwrap().is_empty());
    }
}
