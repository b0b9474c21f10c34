//! Infrastructure layer - Database, store and hashing implementations

pub mod logging;
pub mod storage;
pub mod user;
