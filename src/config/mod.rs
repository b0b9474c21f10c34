//! Application configuration

mod app_config;

pub use app_config::{
    parse_listen_addr, AppConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
    StatusPolicy, StoreBackend, DEFAULT_LISTEN_ADDR,
};
