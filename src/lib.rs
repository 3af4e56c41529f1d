//! Todoist API service library

// Public modules
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod server;

// Re-export commonly used types
pub use config::{ServerSettings, Settings};
pub use error::ApiError;
pub use server::App;
