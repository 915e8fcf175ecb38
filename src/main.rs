//! aca-quickstart: a minimal HTTP quickstart service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from an optional TOML file, resolves the listen port from
//! CLI/env/config, builds the Axum router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aca_quickstart::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use aca_quickstart::http::start_server;
use aca_quickstart::routes::create_router;

/// A minimal JSON-over-HTTP quickstart service
#[derive(Parser, Debug)]
#[command(name = "aca-quickstart", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "aca_quickstart=debug")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Listen port (overrides PORT env var and config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let config = AppConfig::load(&args.config)?;

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    let port = config.resolve_port(args.port);
    let app = create_router();

    start_server(app, &config, port).await?;

    Ok(())
}
