//! Process-wide error status handling

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::api::types::ErrorResponseMarker;
use crate::config::StatusPolicy;

/// Apply the configured [`StatusPolicy`] to error responses
///
/// Under `compat` every response built from an `ApiError` is sent as
/// `200 OK` with its body untouched. Under `standard` nothing changes.
pub async fn status_policy_middleware(
    State(policy): State<StatusPolicy>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if policy == StatusPolicy::Compat
        && response.extensions().get::<ErrorResponseMarker>().is_some()
    {
        *response.status_mut() = StatusCode::OK;
    }

    response
}
