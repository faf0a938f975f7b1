//! Voice API entry point.
//!
//! Initializes tracing, layers configuration from an optional TOML file, the
//! environment and the command line, builds the router and serves until a
//! fatal error occurs.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voice_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use voice_api::create_router;
use voice_api::http::start_server;

/// Voice API: keyword voice commands over JSON
#[derive(Parser, Debug)]
#[command(name = "voice-api", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening port (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Listening host (overrides HOST and the config file)
    #[arg(long)]
    host: Option<String>,

    /// Log level filter (e.g., "voice_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first so the log format is known before tracing starts
    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(host) = args.host {
        config.http.host = host;
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        port = config.http.port,
        "🚀 AgenticSeek Voice API starting on port {}",
        config.http.port
    );
    tracing::info!("🎤 Voice endpoints ready");
    tracing::info!("🌐 CORS enabled for all origins");

    let app = create_router();

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server terminated");
        std::process::exit(1);
    }

    Ok(())
}
