//! crypto-tracker HTTP Server
//!
//! Axum-based server exposing the price-then-describe lookup as a JSON
//! endpoint, plus a one-page frontend served from `static/`.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use price_tracker::{CoinGeckoClient, PriceSource, StaticPriceSource, Tracker};
use tracker_core::{DescriptionLookup, GenerationOptions, LlmProvider};
use tracker_runtime::{GroqProvider, OllamaProvider};

use crate::config::{AppConfig, LlmConfig, PriceSourceKind};
use crate::handlers::{health_check, list_models, lookup_handler};
use crate::state::AppState;

pub(crate) fn build_router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/models", get(list_models))
        .route("/api/lookup", post(lookup_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_llm(config: LlmConfig) -> anyhow::Result<(Arc<dyn LlmProvider>, GenerationOptions)> {
    match config {
        LlmConfig::Groq(groq) => {
            let options = groq.generation_options();
            let provider: Arc<dyn LlmProvider> = Arc::new(GroqProvider::from_config(groq)?);
            Ok((provider, options))
        }
        LlmConfig::Ollama(ollama) => {
            let options = ollama.generation_options();
            let provider: Arc<dyn LlmProvider> = Arc::new(OllamaProvider::from_config(ollama)?);
            Ok((provider, options))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before reading RUST_LOG
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    // Price source
    let prices: Arc<dyn PriceSource> = match config.price_source {
        PriceSourceKind::CoinGecko => Arc::new(CoinGeckoClient::new(config.coingecko.clone())?),
        PriceSourceKind::Static => {
            tracing::warn!("⚠ Using static demo prices - no live market data");
            Arc::new(StaticPriceSource::demo())
        }
    };

    // LLM provider
    let (provider, options) = build_llm(config.llm.clone())?;
    match provider.health_check().await {
        Ok(true) => {
            tracing::info!("✓ Connected to {} (model {})", provider.name(), options.model);
        }
        Ok(false) | Err(_) => {
            tracing::warn!("⚠ {} not reachable - descriptions will be unavailable", provider.name());
        }
    }

    let tracker = Tracker::new(prices, DescriptionLookup::new(provider, options));
    let state = AppState {
        tracker: Arc::new(tracker),
    };

    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 crypto-tracker running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  GET  /api/models  - List LLM models");
    tracing::info!("  POST /api/lookup  - Price and description");

    axum::serve(listener, app).await?;

    Ok(())
}
