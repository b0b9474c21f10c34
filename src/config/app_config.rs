use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::storage::{PostgresConfig, DEFAULT_DATABASE_URL};

/// Default listen address, all interfaces on port 5001
pub const DEFAULT_LISTEN_ADDR: &str = ":5001";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host:port`, or `:port` for every interface
    pub listen_addr: String,
    pub status_policy: StatusPolicy,
}

/// HTTP status used for error responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Every error body is sent with `200 OK`, as existing clients expect
    #[default]
    Compat,
    /// Errors keep their 4xx/5xx status
    Standard,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
}

/// Where user documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    /// Process-local documents, lost on exit
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            status_policy: StatusPolicy::default(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, DomainError> {
        parse_listen_addr(&self.listen_addr)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let postgres = PostgresConfig::default();

        Self {
            backend: StoreBackend::default(),
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: postgres.max_connections,
            min_connections: postgres.min_connections,
            connect_timeout_secs: postgres.connect_timeout_secs,
        }
    }
}

impl DatabaseConfig {
    pub fn postgres(&self) -> PostgresConfig {
        PostgresConfig::new(&self.url)
            .with_max_connections(self.max_connections)
            .with_min_connections(self.min_connections)
            .with_connect_timeout(self.connect_timeout_secs)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Parse a listen address in either `host:port` or `:port` form
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr, DomainError> {
    let invalid = |e: &dyn std::fmt::Display| {
        DomainError::configuration(format!("Invalid listen address '{}': {}", addr, e))
    };

    match addr.strip_prefix(':') {
        Some(port) => {
            let port: u16 = port.parse().map_err(|e| invalid(&e))?;
            Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
        }
        None => addr.parse().map_err(|e| invalid(&e)),
    }
}
