//! Middleware module
//!
//! Contains HTTP middleware for request logging and CORS.

pub mod cors;
pub mod logging;

// Re-export commonly used items
pub use cors::cors_layer;
pub use logging::{log_request, TraceId, REQUEST_ID_HEADER, TRACE_ID_HEADER};
