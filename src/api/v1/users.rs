//! User endpoints

use axum::extract::State;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path, UserResponse};
use crate::domain::{CreateUserParams, NewUser, UpdateUserParams};

/// POST /api/v1/user
pub async fn create_user(
    State(state): State<AppState>,
    Json(params): Json<CreateUserParams>,
) -> Result<Json<UserResponse>, ApiError> {
    let new_user = NewUser::from_params(params, state.hasher.as_ref()).inspect_err(|e| {
        debug!(error = %e, "Rejected user creation");
    })?;
    let user = state.user_store.create_user(new_user).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/v1/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    match state.user_store.get_user_by_id(&id).await {
        Ok(user) => Ok(Json(UserResponse::from(&user))),
        Err(e) if e.is_not_found() => Err(ApiError::not_found("not found")),
        Err(e) => Err(e.into()),
    }
}

/// GET /api/v1/user
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_store.get_users().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// PUT /api/v1/user/{id}
pub async fn put_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(params): Json<UpdateUserParams>,
) -> Result<Json<Value>, ApiError> {
    state.user_store.put_user(&id, params).await?;

    Ok(Json(json!({ "updated": id })))
}

/// DELETE /api/v1/user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.user_store.delete_user(&id).await?;

    Ok(Json(json!({ "deleted": id })))
}
