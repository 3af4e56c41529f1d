//! Health check endpoints
//!
//! This module provides health check endpoints for monitoring
//! and container orchestration (Kubernetes, ECS, etc.)

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Response for the main health check endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub project_name: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Response for readiness probe
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

/// Individual readiness checks
#[derive(Debug, Serialize)]
pub struct ReadinessChecks {
    pub config_loaded: bool,
    pub database: bool,
}

/// Response for liveness probe
#[derive(Serialize)]
pub struct LivenessResponse {
    pub alive: bool,
}

/// Main health check endpoint
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        project_name: state.settings.project_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Readiness probe endpoint
///
/// Ready once the database behind `DATABASE_URL` answers a query. An
/// unreachable or misconfigured database yields 503.
///
/// GET /ready
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, ApiError> {
    state.db.ping().await.map_err(|e| {
        tracing::warn!(
            database_url = %state.settings.redacted_database_url(),
            error = %e,
            "Service not ready"
        );
        e
    })?;

    Ok(Json(ReadinessResponse {
        ready: true,
        checks: ReadinessChecks {
            config_loaded: true,
            database: true,
        },
    }))
}

/// Liveness probe endpoint
///
/// GET /liveness
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { alive: true })
}
