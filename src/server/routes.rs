//! Application routing
//!
//! This module defines all HTTP routes for the application.

use axum::{middleware, routing::get, Router};

use crate::api::{health, info};
use crate::middleware::{cors_layer, log_request};
use crate::server::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness))
        .route("/liveness", get(health::liveness));

    let cors = cors_layer(&state.settings.cors_origins);

    Router::new()
        .route("/", get(info::root))
        .merge(health_routes)
        .fallback(info::not_found)
        // Layer order: last added = outermost = runs first
        .layer(cors)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
