//! API metadata endpoint

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::server::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub message: String,
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let name = state.settings.project_name.clone();
    Json(RootResponse {
        message: format!("Welcome to {}", name),
        name,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
