use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use common::filter::LocationMatch;
use common::{FileStorage, JobStore};
use server::{AppState, create_app};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "server", about = "Job board REST API")]
struct Config {
    #[arg(long, env = "KAZI_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    /// Directory the board is saved in
    #[arg(long, env = "KAZI_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// How the location filter compares: exact or substring
    #[arg(long, env = "KAZI_LOCATION_MATCH", default_value = "exact")]
    location_match: LocationMatch,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    info!(data_dir = %config.data_dir.display(), location_match = %config.location_match, "starting job board server");

    let store = JobStore::new(FileStorage::new(&config.data_dir));
    info!(jobs = store.load().len(), "loaded board");

    let state = Arc::new(AppState::new(store, config.location_match));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("🌐 Server running at http://{}", config.addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
