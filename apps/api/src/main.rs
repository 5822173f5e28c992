mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod normalize;
mod routes;
mod search;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::generation::generator::LlmDescriptionGenerator;
use crate::llm_client::LlmClient;
use crate::normalize::Normalizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing OPENAI_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Description API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "OPENAI_API_KEY found (length: {})",
        config.openai_api_key.len()
    );

    // Load the reference sheet; nothing is served without it
    let catalog = load_catalog(&config.table_path, &config.table_sheet)?;
    if catalog.is_empty() {
        warn!("Job table is empty; every search will miss");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        normalizer: Arc::new(Normalizer::new()),
        generator: Arc::new(LlmDescriptionGenerator::new(llm)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
