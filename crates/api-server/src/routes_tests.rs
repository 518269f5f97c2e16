#[cfg(test)]
mod tests {
    use super::super::analyze_routes::{
        analyze_media, health, AnalyzeRequest, ApiDoc, MediaReportRequest,
    };
    use super::super::embedded_frontend::static_handler;
    use super::super::*;

    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::extract::State;
    use axum::http::{header, StatusCode, Uri};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use chrono::{Duration, NaiveDate, Utc};
    use pulse_core::{
        Article, ArticleSource, LabelSet, PulseError, SentimentResult, SentimentScorer, SortOrder,
    };
    use utoipa::OpenApi;

    struct EmptySource;

    #[async_trait]
    impl ArticleSource for EmptySource {
        async fn search(
            &self,
            _topic: &str,
            _sort: SortOrder,
            _from: Option<NaiveDate>,
            _max: u32,
        ) -> Result<Vec<Article>, PulseError> {
            Ok(Vec::new())
        }
    }

    struct SingleArticleSource;

    #[async_trait]
    impl ArticleSource for SingleArticleSource {
        async fn search(
            &self,
            _topic: &str,
            _sort: SortOrder,
            _from: Option<NaiveDate>,
            _max: u32,
        ) -> Result<Vec<Article>, PulseError> {
            Ok(vec![Article {
                title: "Solar output doubles".to_string(),
                description: Some("Panel installations keep climbing.".to_string()),
                content: None,
                url: "https://news.example.com/solar".to_string(),
                image: None,
                published_at: Utc::now() - Duration::days(3),
                source: serde_json::Value::Null,
            }])
        }
    }

    struct PositiveScorer;

    #[async_trait]
    impl SentimentScorer for PositiveScorer {
        async fn classify(
            &self,
            labels: &LabelSet,
            text: &str,
        ) -> Result<SentimentResult, PulseError> {
            Ok(SentimentResult {
                labels: labels.candidates().to_vec(),
                scores: vec![0.8, 0.15, 0.05],
                sequence: text.to_string(),
                top_label: labels.candidates()[0].clone(),
            })
        }
    }

    fn state_with(source: Arc<dyn ArticleSource>, scorer: Arc<dyn SentimentScorer>) -> AppState {
        AppState {
            orchestrator: Arc::new(ReportOrchestrator::new(source, scorer)),
            classifier: Arc::new(ZeroShotClient::new(ClassifierConfig::new(
                "test-token".to_string(),
            ))),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_error_status_mapping() {
        let bad_request = ApiError(PulseError::Validation("Missing topic".to_string()));
        assert_eq!(bad_request.status(), StatusCode::BAD_REQUEST);

        let not_found = ApiError(PulseError::NotFound("No articles found".to_string()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let upstream = ApiError(PulseError::UpstreamStatus {
            service: "classifier",
            status: 503,
        });
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let garbage = ApiError(PulseError::InvalidResponse("no labels".to_string()));
        assert_eq!(garbage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let err = ApiError(PulseError::UpstreamStatus {
            service: "classifier",
            status: 503,
        });
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "classifier request failed with status 503");
    }

    #[tokio::test]
    async fn test_blank_topic_yields_400_missing_topic() {
        let state = state_with(Arc::new(EmptySource), Arc::new(PositiveScorer));
        let err = analyze_media(
            State(state),
            Json(MediaReportRequest {
                topic: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "Missing topic");
    }

    #[tokio::test]
    async fn test_no_matches_yields_404() {
        let state = state_with(Arc::new(EmptySource), Arc::new(PositiveScorer));
        let err = analyze_media(
            State(state),
            Json(MediaReportRequest {
                topic: "obscure".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        let body = body_json(err.into_response()).await;
        assert_eq!(body["error"], "No articles found");
    }

    #[tokio::test]
    async fn test_media_report_success_shape() {
        let state = state_with(Arc::new(SingleArticleSource), Arc::new(PositiveScorer));
        let Json(report) = analyze_media(
            State(state),
            Json(MediaReportRequest {
                topic: "solar".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.summary_recent.total, 1);
        assert_eq!(report.summary_recent.positive, 1);
        assert!(report.most_recent_article.is_some());
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        assert_eq!(health().await, "ok");
    }

    #[test]
    fn test_requests_tolerate_missing_fields() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.topic, "");
        assert_eq!(request.text, "");

        let request: MediaReportRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.topic, "");
    }

    #[test]
    fn test_openapi_document_lists_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/analyze"].is_object());
        assert!(doc["paths"]["/analyze-media"].is_object());
        assert!(doc["paths"]["/health"].is_object());
    }

    #[tokio::test]
    async fn test_frontend_served_at_root() {
        let response = static_handler(Uri::from_static("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let response = static_handler(Uri::from_static("/reports/solar")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }
}
