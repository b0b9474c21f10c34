//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::domain::user::ValidationErrors;
use crate::domain::DomainError;

/// Response extension marking a body produced by [`ApiError`]
///
/// The status policy middleware only rewrites responses carrying it, so
/// routing failures and successful responses keep their status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorResponseMarker;

/// API error with status code
///
/// The body is either `{"error": message}` or, for failed validation, the
/// field to message map.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    /// Create a new API error with an `{"error": message}` body
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Route exists but not for this method
    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Field-level validation failure, serialized as the bare map
    pub fn validation(errors: ValidationErrors) -> Self {
        let body = errors
            .into_iter()
            .map(|(field, message)| (field, Value::String(message)))
            .collect();

        Self {
            status: StatusCode::BAD_REQUEST,
            body: Value::Object(body),
        }
    }

    /// Message of an `{"error": ...}` body
    pub fn message(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        response.extensions_mut().insert(ErrorResponseMarker);
        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();

        match err {
            DomainError::NotFound { .. } => Self::not_found(message),
            DomainError::Validation { errors } => Self::validation(errors),
            DomainError::InvalidId { .. } => Self::bad_request(message),
            DomainError::Configuration { .. }
            | DomainError::Internal { .. }
            | DomainError::Storage { .. } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body)
    }
}

impl std::error::Error for ApiError {}
