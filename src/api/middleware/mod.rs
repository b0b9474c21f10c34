//! API middleware components

pub mod logging;
pub mod status_policy;

pub use logging::logging_middleware;
pub use status_policy::status_policy_middleware;
