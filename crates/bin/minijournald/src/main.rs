//! # minijournald — minijournal daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Construct the JSON-file repository (adapter)
//! - Seed sample entries on first run
//! - Construct the application service, injecting the repository via its port
//! - Build the axum router, injecting the application service
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use minijournal_adapter_http_axum::state::AppState;
use minijournal_adapter_storage_jsonfile::JsonFileEntryRepository;
use minijournal_app::services::entry_service::EntryService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Storage
    let repo = JsonFileEntryRepository::new(config.data_file());

    // Service
    let entry_service = EntryService::new(repo);
    entry_service.seed_if_missing().await?;

    // HTTP
    let state = AppState::new(entry_service);
    let app = minijournal_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "minijournald listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
