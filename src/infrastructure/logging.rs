//! Tracing subscriber setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::domain::DomainError;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Fails if the level
/// does not parse or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), DomainError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty().with_target(true)).try_init(),
    };

    installed.map_err(|e| {
        DomainError::configuration(format!("Failed to install log subscriber: {}", e))
    })?;

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}

fn configured_filter(level: &str) -> Result<EnvFilter, DomainError> {
    EnvFilter::try_new(level)
        .map_err(|e| DomainError::configuration(format!("Invalid log level '{}': {}", level, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_accepts_directives() {
        assert!(configured_filter("info").is_ok());
        assert!(configured_filter("hotel_reservation=debug,tower_http=info").is_ok());
    }

    #[test]
    fn test_configured_filter_rejects_bad_level() {
        let err = configured_filter("hotel_reservation=loud").unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
    }
}
