//! rva-server - review analyzer HTTP service
//!
//! Loads seed reviews, then serves listing (GET) and creation (POST) of
//! sentiment-annotated reviews.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rva_common::config::{CliOverrides, ServerConfig};
use rva_common::LexiconScorer;
use rva_server::seed::load_seed_file;
use rva_server::store::ReviewStore;
use rva_server::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for rva-server
#[derive(Parser, Debug)]
#[command(name = "rva-server")]
#[command(about = "Review analyzer HTTP service")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind (overrides RVA_HOST)
    #[arg(long)]
    host: Option<String>,

    /// CSV file of seed reviews (overrides RVA_SEED_FILE)
    #[arg(short, long)]
    seed_file: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "RVA_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rva_server=info,rva_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting rva-server v{}", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::resolve(&CliOverrides {
        port: args.port,
        host: args.host,
        seed_file: args.seed_file,
        config_file: args.config,
    })
    .context("Failed to resolve configuration")?;

    let seed = load_seed_file(&config.seed_file).with_context(|| {
        format!("Failed to load seed reviews from {}", config.seed_file.display())
    })?;
    info!("Review store initialized with {} reviews", seed.len());

    let state = AppState::new(ReviewStore::from_records(seed), Arc::new(LexiconScorer::new()));
    let app = build_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
