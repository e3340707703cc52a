//! HostScope Server
//!
//! Run with: cargo run --bin hostscope
//!
//! # Configuration
//!
//! Settings come from `--config PATH`, or the first of
//! `~/.config/hostscope/config.toml`, `/etc/hostscope/config.toml` and
//! `./config.toml` that exists. Environment variables override the file:
//! - `HOSTSCOPE_HOST`, `HOSTSCOPE_PORT`: Bind address (default: 0.0.0.0:8501)
//! - `HOSTSCOPE_DATA_DIR`: Directory holding the country and GDP files
//! - `HOSTSCOPE_ASSETS_DIR`: Optional images and `flags/<CODE>.png`
//! - `HOSTSCOPE_FLAG_CDN_URL`: Flag CDN base URL
//! - `HOSTSCOPE_LOG_LEVEL`, `HOSTSCOPE_LOG_FORMAT`: Logging (`RUST_LOG` wins)

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use hostscope::api::{serve, AppState};
use hostscope::config::Config;
use hostscope::logging::{init_logging, with_bootstrap_logging};

#[derive(Parser)]
#[command(name = "hostscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "World Cup host feasibility explorer")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => with_bootstrap_logging(Config::load_default),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting HostScope v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", config.data.data_dir);
    tracing::info!("Assets directory: {}", config.assets.assets_dir);
    tracing::info!("Flag CDN: {}", config.flags.cdn_base_url);

    let state = AppState::from_config(&config).context("initializing application state")?;
    tracing::info!(
        countries = state.store.countries()?.len(),
        series_points = state.store.gdp_series()?.len(),
        "Data loaded"
    );

    serve(state, &config.server)
        .await
        .context("running web server")?;

    tracing::info!("HostScope stopped");
    Ok(())
}
