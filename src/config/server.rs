//! HTTP listener settings
//!
//! These belong to the service host rather than to the application
//! configuration, so they live apart from [`super::Settings`].

use anyhow::{Context, Result};
use std::env;

/// Listener and logging settings for the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerSettings {
    /// Load server settings from environment variables with defaults
    ///
    /// Only parsing happens here; call [`Self::with_overrides`] to apply
    /// command-line values and validate the result.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve server settings against an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host: or_default("HOST", "0.0.0.0"),
            port: or_default("PORT", "8000")
                .parse()
                .context("Invalid PORT value")?,
            log_level: or_default("LOG_LEVEL", "info"),
        })
    }

    /// Apply command-line overrides, then validate the final settings
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        log_level: Option<String>,
    ) -> Result<Self> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }

        self.validate()?;

        Ok(self)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Port cannot be 0");
        }
        if self.host.trim().is_empty() {
            anyhow::bail!("Host cannot be empty");
        }
        Ok(())
    }

    /// Get the server address string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}
