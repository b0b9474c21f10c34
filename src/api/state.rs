//! Application state for shared services

use std::sync::Arc;

use crate::domain::{PasswordHasher, UserStore};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub hasher: Arc<dyn PasswordHasher>,
}

impl AppState {
    pub fn new(user_store: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { user_store, hasher }
    }
}
