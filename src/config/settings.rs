//! Application settings
//!
//! Resolves the process-wide configuration: each field has a compiled-in
//! default, and the database connection string may be overridden from the
//! environment. The resolved value is immutable and shared through `Arc`.

use serde::Serialize;
use std::env;

/// Display name used by the API metadata surface
pub const DEFAULT_PROJECT_NAME: &str = "Todoist API";

/// Allowed cross-origin request sources, in matching order
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000"];

/// Connection string used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./test.db";

/// Environment variable that overrides [`Settings::database_url`]
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

const REDACTED: &str = "***";

/// Main application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Project display name
    pub project_name: String,

    /// Allowed CORS origins, in declared order
    pub cors_origins: Vec<String>,

    /// Opaque database connection string, handed to the pool factory as-is
    pub database_url: String,
}

impl Settings {
    /// Load settings from the process environment with defaults
    ///
    /// Only `DATABASE_URL` is consulted. Its value is taken verbatim, even
    /// when empty. This never fails: malformed values surface later, when
    /// the database pool tries to use them.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings against an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            cors_origins: default_cors_origins(),
            database_url: lookup(DATABASE_URL_ENV)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        }
    }

    /// Database URL with any password in the authority replaced by `***`
    ///
    /// Safe for logs. Strings without a `scheme://user:pass@` shape are
    /// returned unchanged.
    pub fn redacted_database_url(&self) -> String {
        redact_url_password(&self.database_url)
    }

    /// Copy of these settings with the database password redacted
    pub fn redacted(&self) -> Self {
        Self {
            database_url: self.redacted_database_url(),
            ..self.clone()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

fn redact_url_password(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];

    // userinfo ends at the last '@' of the authority
    let Some(at) = authority.rfind('@') else {
        return url.to_string();
    };
    let userinfo = &authority[..at];
    let Some(colon) = userinfo.find(':') else {
        return url.to_string();
    };

    format!(
        "{}{}:{}{}",
        &url[..authority_start],
        &userinfo[..colon],
        REDACTED,
        &url[authority_start + at..]
    )
}
