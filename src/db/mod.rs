//! Database module
//!
//! Wraps the connection pool that consumes the configured database URL.

pub mod pool;

pub use pool::{Database, DbError};
