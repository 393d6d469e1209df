//! Dashboard HTTP Server Binary
//!
//! Loads the launch dataset, builds the view bindings and serves the
//! dashboard page plus its JSON API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spacex-dash-server
//! ```
//!
//! # Configuration
//!
//! Settings come from `dashboard.toml` when present (see [`DashboardConfig`]).
//! These environment variables take precedence:
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `DATASET_PATH`: Launch CSV (default: spacex_launch_dash.csv)
//! - `RUST_LOG`: Log filter directives, e.g. `spacex_dash=debug` (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use spacex_dash::config::DashboardConfig;
use spacex_dash::dataset;
use spacex_dash::http::{create_router, AppState};

/// Filter from `RUST_LOG`-style directives, falling back to INFO when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_target(true)
        .init();

    info!("Starting SpaceX launch dashboard");

    let config = DashboardConfig::load()?;

    // Dataset load failure is fatal
    let dataset = Arc::clone(dataset::init_dataset(&config.dataset.path)?);
    info!(
        records = dataset.len(),
        sites = dataset.sites().len(),
        "Dataset loaded"
    );

    let state = AppState::new(dataset);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
