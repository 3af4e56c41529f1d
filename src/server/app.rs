//! Application server
//!
//! This module provides the main application server implementation
//! including initialization and graceful shutdown handling.

use crate::{
    config::{ServerSettings, Settings},
    server::{routes, state::AppState},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Main application struct
pub struct App {
    server: ServerSettings,
    state: AppState,
}

impl App {
    /// Create a new application instance
    ///
    /// Takes ownership of the resolved settings; from here on they are only
    /// reachable through the shared, read-only `AppState`.
    pub fn new(settings: Settings, server: ServerSettings) -> Result<Self> {
        tracing::debug!("Initializing application state");
        let state = AppState::new(Arc::new(settings))
            .context("Failed to create database pool from DATABASE_URL")?;

        Ok(Self { server, state })
    }

    /// Run the server with graceful shutdown support
    ///
    /// The server will shut down gracefully when receiving SIGINT (Ctrl+C)
    /// or SIGTERM signals.
    pub async fn run_with_graceful_shutdown(self) -> Result<()> {
        let listener = self.bind().await?;
        let router = routes::create_router(self.state.clone());

        tracing::info!(
            "Starting server on {} with graceful shutdown enabled",
            listener.local_addr()?
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.cleanup().await;

        Ok(())
    }

    /// Bind the listener, resolving `host` if it is a name
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind((self.server.host.as_str(), self.server.port))
            .await
            .with_context(|| format!("Failed to bind {}", self.server.server_addr()))
    }

    /// Cleanup application resources
    async fn cleanup(&self) {
        tracing::info!("Closing database pool");
        self.state.db.close().await;
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the settings
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }
}

/// Create a future that completes when a shutdown signal is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_shares_settings() {
        let settings = Settings::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "sqlite::memory:".to_string())
        });
        let app = App::new(settings.clone(), ServerSettings::default()).unwrap();
        assert_eq!(app.settings(), &settings);
        assert!(Arc::ptr_eq(&app.state().settings, &app.state().clone().settings));
    }

    #[tokio::test]
    async fn test_bind_resolves_hostname() {
        let settings = Settings::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "sqlite::memory:".to_string())
        });
        let server = ServerSettings {
            host: "localhost".to_string(),
            port: 0,
            log_level: "info".to_string(),
        };
        let app = App::new(settings, server).unwrap();
        let listener = app.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_unparseable_database_url_fails_startup() {
        let settings = Settings::from_lookup(|key| (key == "DATABASE_URL").then(String::new));
        let err = App::new(settings, ServerSettings::default()).err().unwrap();
        assert!(err.to_string().contains("DATABASE_URL"));
    }
}
