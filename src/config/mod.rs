//! Configuration management module
//!
//! This module resolves the application configuration and the listener
//! settings of the service host from environment variables and defaults.

pub mod server;
pub mod settings;

pub use server::ServerSettings;
pub use settings::{
    Settings, DATABASE_URL_ENV, DEFAULT_CORS_ORIGINS, DEFAULT_DATABASE_URL, DEFAULT_PROJECT_NAME,
};
