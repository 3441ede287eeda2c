//! Tracker HTTP Server Binary
//!
//! Loads the configuration, opens the dataset store and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Serve a JSON export of the tracker spreadsheet
//! ELT_DATA_PATH=data/bills.json cargo run --bin elt-server
//!
//! # Or point at a configuration file
//! ELT_CONFIG=tracker.toml cargo run --bin elt-server
//! ```
//!
//! # Environment Variables
//!
//! - `ELT_CONFIG`: Path to `tracker.toml` (default: searched in standard locations)
//! - `ELT_SOURCE_TYPE`: `json` or `memory` when no config file is used
//! - `ELT_DATA_PATH`: Data file for the JSON source
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use elt_rust::db::{self, TrackerConfig};
use elt_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting tracker HTTP server");

    let config = TrackerConfig::load().context("Failed to load tracker configuration")?;
    let store = db::open_store(&config).context("Failed to create record source")?;
    info!("Record source: {}", store.source_description());

    // A missing source is reported per request until a reload succeeds
    match store.snapshot() {
        Ok(dataset) => info!(
            "Dataset ready: {} records ({} undated dropped)",
            dataset.records.len(),
            dataset.undated_records
        ),
        Err(e) => warn!("Dataset not loaded at startup: {}", e),
    }

    let app = create_router(AppState::new(store));

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
