//! Settings panel server binary
//!
//! Loads the server configuration and setting catalog, wires the domain
//! service over an in-process store, and serves the panel HTTP API.

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use settings_panel::api::rest::routes;
use settings_panel::domain::{LogEventPublisher, Service, StoreProvider};
use settings_panel::infra::catalog::load_catalog;
use settings_panel::infra::storage::MemoryStoreProvider;
use settings_panel::PanelConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "panel-server", version, about = "Settings panel server")]
struct Args {
    /// Path to the server configuration file
    #[arg(long, default_value = "config/panel.yaml")]
    config: PathBuf,

    /// Override the configured listen address
    #[arg(long)]
    listen: Option<SocketAddr>,
}

/// Top-level server configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AppConfig {
    /// Address to serve the panel API on
    #[serde(default = "default_listen_addr")]
    listen_addr: SocketAddr,

    /// Path to the setting catalog file
    catalog_path: PathBuf,

    /// Panel module configuration
    #[serde(default)]
    panel: PanelConfig,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("reading config file {}", args.config.display()))?;
    let config: AppConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", args.config.display()))?;

    let catalog = Arc::new(
        load_catalog(&config.catalog_path)
            .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?,
    );
    tracing::info!(
        settings = catalog.len(),
        tier = %config.panel.tier,
        data_center = %config.panel.data_center,
        "settings catalog loaded"
    );

    let provider = Arc::new(MemoryStoreProvider::new());
    let store = provider
        .open(&config.panel.connection_string)
        .await
        .context("opening override store")?;
    let events = Arc::new(LogEventPublisher);

    let service = Arc::new(Service::new(
        catalog,
        store,
        provider,
        events,
        &config.panel,
    ));

    let app = routes::router(service).layer(TraceLayer::new_for_http());

    let addr = args.listen.unwrap_or(config.listen_addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!(%addr, "settings panel listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving panel API")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown handler");
    }
    tracing::info!("shutting down");
}
