//! Sentiment Routes
//!
//! API endpoints for ad-hoc text classification and the full
//! per-topic media report.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use utoipa::OpenApi;

use pulse_core::{LabelSet, MediaReport, SentimentResult};

use crate::{ApiError, AppState};

// ─── Request types ──────────────────────────────────────────────────────────

/// Request to classify one text against a topic's candidate labels.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AnalyzeRequest {
    /// Topic the candidate labels are templated around.
    #[serde(default)]
    pub topic: String,
    /// Text to classify.
    #[serde(default)]
    pub text: String,
}

/// Request for a full media-sentiment report.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct MediaReportRequest {
    #[serde(default)]
    pub topic: String,
}

// ─── Routes ─────────────────────────────────────────────────────────────────

pub fn analyze_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/analyze-media", post(analyze_media))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Classify a single text against the three sentiment labels for a topic.
///
/// The ranking comes back exactly as the classifier produced it. No topic
/// validation happens here; an empty topic still yields three labels.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Ranked candidate labels for the text", body = SentimentResult),
        (status = 500, description = "Classifier unavailable or returned garbage")
    ),
    tag = "sentiment"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SentimentResult>, ApiError> {
    let labels = LabelSet::for_topic(&request.topic);
    let result = state.classifier.classify_text(&labels, &request.text).await?;
    Ok(Json(result))
}

/// Build the full media-sentiment report for a topic.
#[utoipa::path(
    post,
    path = "/analyze-media",
    request_body = MediaReportRequest,
    responses(
        (status = 200, description = "Monthly breakdown plus recent pulse", body = MediaReport),
        (status = 400, description = "Topic missing or blank"),
        (status = 404, description = "No articles matched the topic"),
        (status = 500, description = "An upstream call failed")
    ),
    tag = "sentiment"
)]
pub async fn analyze_media(
    State(state): State<AppState>,
    Json(request): Json<MediaReportRequest>,
) -> Result<Json<MediaReport>, ApiError> {
    let report = state
        .orchestrator
        .build_report(&request.topic)
        .await
        .map_err(|err| {
            tracing::error!("media report for {:?} failed: {}", request.topic, err);
            ApiError(err)
        })?;
    Ok(Json(report))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up")),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "ok"
}

// ─── OpenAPI document ───────────────────────────────────────────────────────

#[derive(OpenApi)]
#[openapi(
    paths(analyze, analyze_media, health),
    components(schemas(AnalyzeRequest, MediaReportRequest, SentimentResult, MediaReport)),
    tags(
        (name = "sentiment", description = "News media sentiment analysis"),
        (name = "health", description = "Service probes")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
