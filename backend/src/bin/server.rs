//! Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard REST API server.
//! It loads the configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin dashboard-server
//!
//! # With an explicit configuration file
//! DASHBOARD_CONFIG=./dashboard.toml cargo run --bin dashboard-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DASHBOARD_CONFIG`: Path to a `dashboard.toml` file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use entregas_dashboard::config::ServerConfig;
use entregas_dashboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting dashboard HTTP server");

    let config = ServerConfig::load()?;
    let addr: SocketAddr = config.bind_address().parse()?;
    info!(
        sheet = %config.uploads.performance_sheet,
        max_balance_files = config.uploads.max_balance_files,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    info!("Server listening on http://{}", addr);
    info!("Dashboard description: http://{}/v1/dashboard", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
