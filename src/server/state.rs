//! Application state container
//!
//! This module defines the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::Settings;
use crate::db::{Database, DbError};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Cheap to clone. The settings are resolved once at startup and are
/// read-only from here on.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Database handle built from `settings.database_url`
    pub db: Database,

    /// Application start time (for uptime calculation)
    pub start_time: Instant,
}

impl AppState {
    /// Create a new application state
    ///
    /// The database pool is created lazily: an unreachable database does not
    /// prevent startup, but a URL that cannot be parsed does.
    pub fn new(settings: Arc<Settings>) -> Result<Self, DbError> {
        tracing::debug!(
            database_url = %settings.redacted_database_url(),
            "Creating database pool"
        );
        let db = Database::connect_lazy(&settings.database_url)?;

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            settings,
            db,
            start_time: Instant::now(),
        })
    }

    /// Get the application uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
