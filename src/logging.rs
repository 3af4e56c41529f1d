//! Logging setup
//!
//! Installs the global tracing subscriber. Output is JSON on stdout so it
//! can be shipped to a log collector unchanged.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Build the level filter: `RUST_LOG` wins, otherwise `log_level`
///
/// An unparseable `log_level` falls back to `info`.
pub fn build_filter(log_level: &str) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), log_level)
}

fn filter_from(rust_log: Option<&str>, log_level: &str) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber with the specified log level
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let console_layer = fmt::layer().json().with_filter(build_filter(log_level));

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()?;

    Ok(())
}
