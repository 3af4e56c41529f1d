//! Todoist API
//!
//! Service host: resolves the configuration once, then serves HTTP with
//! that configuration shared read-only across all handlers.

use anyhow::Result;
use clap::Parser;
use todoist_api::{
    config::{ServerSettings, Settings},
    logging::init_tracing,
    server::App,
};

/// Todoist API backend service
#[derive(Parser, Debug)]
#[command(name = "todoist-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT env var)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the resolved configuration as JSON (password redacted) and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env entries never override variables already set in the process
    dotenvy::dotenv().ok();

    let settings = Settings::load();

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&settings.redacted())?);
        return Ok(());
    }

    let server = ServerSettings::load()?.with_overrides(args.host, args.port, args.log_level)?;

    init_tracing(&server.log_level)?;

    tracing::info!(
        project_name = %settings.project_name,
        version = env!("CARGO_PKG_VERSION"),
        cors_origins = ?settings.cors_origins,
        database_url = %settings.redacted_database_url(),
        host = %server.host,
        port = %server.port,
        "Starting application"
    );

    let app = App::new(settings, server)?;

    app.run_with_graceful_shutdown().await?;

    tracing::info!("Application shutdown complete");

    Ok(())
}
