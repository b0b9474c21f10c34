//! Command line interface
//!
//! Flags override the layered configuration loaded from files and the
//! environment.

pub mod serve;

use clap::Parser;

use crate::config::{AppConfig, StoreBackend};

/// Hotel reservation API - user management over a document store
#[derive(Debug, Parser)]
#[command(name = "hotel-reservation")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on, `host:port` or `:port` for all interfaces [default: :5001]
    #[arg(long)]
    pub listen_addr: Option<String>,

    /// Storage backend for user documents
    #[arg(long, value_enum)]
    pub store: Option<StoreBackend>,

    /// Database connection string
    #[arg(long)]
    pub database_url: Option<String>,
}

impl Cli {
    /// Apply the flags that were given on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(listen_addr) = &self.listen_addr {
            config.server.listen_addr = listen_addr.clone();
        }
        if let Some(store) = self.store {
            config.database.backend = store;
        }
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["hotel-reservation"]).unwrap();
        let mut config = AppConfig::default();

        cli.apply(&mut config);

        assert_eq!(config.server.listen_addr, ":5001");
        assert_eq!(config.database.backend, StoreBackend::Postgres);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "hotel-reservation",
            "--listen-addr",
            "127.0.0.1:8080",
            "--store",
            "memory",
            "--database-url",
            "postgres://db:5432/hotels",
        ])
        .unwrap();
        let mut config = AppConfig::default();

        cli.apply(&mut config);

        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.url, "postgres://db:5432/hotels");
    }

    #[test]
    fn test_unknown_store_rejected() {
        assert!(Cli::try_parse_from(["hotel-reservation", "--store", "mongo"]).is_err());
    }
}
