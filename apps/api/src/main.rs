mod config;
mod db;
mod errors;
mod generation;
mod models;
mod render;
mod routes;
mod state;
mod upstream;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::generation::signals::SignalExtractor;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upstream::HttpUpstream;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HirePath API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the upstream generative-service client
    let upstream = Arc::new(HttpUpstream::new(
        config.upstream_url.clone(),
        config.upstream_api_key.clone(),
        config.upstream_timeout_secs,
    ));
    info!(
        "Upstream client initialized (timeout: {}s)",
        config.upstream_timeout_secs
    );

    // Build the signal extractor once — vocabularies are static
    let extractor = Arc::new(SignalExtractor::new());

    // Build app state
    let state = AppState {
        db,
        upstream,
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
