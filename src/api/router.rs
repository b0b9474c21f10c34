//! HTTP router assembly

use axum::{
    http::{Method, Uri},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::middleware::{logging_middleware, status_policy_middleware};
use super::state::AppState;
use super::types::ApiError;
use super::{health, v1};
use crate::config::StatusPolicy;

/// Create the application router
///
/// Layers run outermost first: request id, tracing, completion logging,
/// then the status policy closest to the handlers. Unmatched paths and
/// methods answer with an `ApiError` so they get the same body and policy.
pub fn create_router(state: AppState, status_policy: StatusPolicy) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", v1::create_v1_router())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            status_policy,
            status_policy_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Cannot {} {}", method, uri.path()))
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
