//! Versioned API endpoints

pub mod users;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/user", get(users::get_users).post(users::create_user))
        .route(
            "/user/{id}",
            get(users::get_user)
                .put(users::put_user)
                .delete(users::delete_user),
        )
}
