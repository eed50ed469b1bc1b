mod config;
mod errors;
mod gateway;
mod llm_client;
mod models;
mod prep;
mod render;
mod routes;
mod search_client;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OPENAI_API_KEY_VAR, SEARCH_API_KEY_VAR};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search_client::SearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Prep API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (API key is looked up per request)
    let llm = LlmClient::new(&config.openai_base_url, OPENAI_API_KEY_VAR)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    if std::env::var(OPENAI_API_KEY_VAR).is_err() {
        warn!("{OPENAI_API_KEY_VAR} is not set yet; generation requests will fail until it is");
    }

    // Initialize web search client
    let search = SearchClient::new(&config.search_api_url, SEARCH_API_KEY_VAR)?;
    info!("Search client initialized ({})", config.search_api_url);

    // Build app state
    let state = AppState {
        config: config.clone(),
        completion: Arc::new(llm),
        search: Arc::new(search),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
