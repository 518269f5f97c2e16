//! HTTP server exposing the media-sentiment pipeline.
//!
//! Routes:
//! - `POST /analyze` classifies one text against a topic's candidate labels
//! - `POST /analyze-media` builds the full per-topic report
//! - `GET /health` liveness probe
//! - `GET /api-docs/openapi.json` OpenAPI document
//! - anything else falls through to the embedded frontend

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gnews_client::{NewsClient, NewsConfig};
use report_orchestrator::ReportOrchestrator;
use zeroshot_client::{ClassifierConfig, ZeroShotClient};

mod analyze_routes;
mod config;
mod embedded_frontend;
mod error;
mod routes_tests;

pub use analyze_routes::analyze_routes;
pub use config::ServerConfig;
pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ReportOrchestrator>,
    pub classifier: Arc<ZeroShotClient>,
}

/// Build the application router around the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(analyze_routes())
        .fallback(embedded_frontend::static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;

    let news = NewsClient::new(NewsConfig {
        api_key: config.gnews_api_key.clone(),
        search_url: config.gnews_api_url.clone(),
    });
    let classifier = Arc::new(ZeroShotClient::new(ClassifierConfig {
        api_token: config.hf_api_token.clone(),
        inference_url: config.hf_api_url.clone(),
    }));
    let orchestrator = Arc::new(ReportOrchestrator::new(Arc::new(news), classifier.clone()));

    let app = build_router(AppState {
        orchestrator,
        classifier,
    });

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
}
