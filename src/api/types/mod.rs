//! API request and response types

pub mod error;
pub mod json;
pub mod path;
pub mod user;

pub use error::{ApiError, ErrorResponseMarker};
pub use json::Json;
pub use path::Path;
pub use user::UserResponse;
