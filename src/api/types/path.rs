//! Path extractor whose rejections use the API error format

use axum::{
    extract::{FromRequestParts, Path as AxumPath},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Path` that turns a rejection (for example
/// a segment that is not valid UTF-8) into an [`ApiError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected path parameters");
                Err(ApiError::new(rejection.status(), rejection.body_text()))
            }
        }
    }
}
