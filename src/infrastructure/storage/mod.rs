//! Storage infrastructure - document database connection

mod postgres;

pub use postgres::{DocumentDatabase, PostgresConfig, DEFAULT_DATABASE_URL};
