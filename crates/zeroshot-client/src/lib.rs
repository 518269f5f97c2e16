use async_trait::async_trait;
use pulse_core::{LabelSet, PulseError, PulseResult, SentimentResult, SentimentScorer};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INFERENCE_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-mnli";

/// Configuration for the zero-shot inference endpoint.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub api_token: String,
    pub inference_url: String,
}

impl ClassifierConfig {
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ClassifyParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    sequence: String,
    labels: Vec<String>,
    scores: Vec<f64>,
}

impl ClassifyResponse {
    fn into_result(self) -> PulseResult<SentimentResult> {
        let top_label = self.labels.first().cloned().ok_or_else(|| {
            PulseError::InvalidResponse("classifier returned no labels".to_string())
        })?;

        Ok(SentimentResult {
            labels: self.labels,
            scores: self.scores,
            sequence: self.sequence,
            top_label,
        })
    }
}

#[derive(Clone)]
pub struct ZeroShotClient {
    client: Client,
    config: ClassifierConfig,
}

impl ZeroShotClient {
    pub fn new(config: ClassifierConfig) -> Self {
        // Transport defaults only; upstream calls carry no request timeout.
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Score one text against the candidate labels, single-label mode.
    ///
    /// Labels and scores come back verbatim from the provider, most-confident
    /// first; `topLabel` is the head of that ranking.
    pub async fn classify_text(
        &self,
        labels: &LabelSet,
        text: &str,
    ) -> PulseResult<SentimentResult> {
        let request = ClassifyRequest {
            inputs: text,
            parameters: ClassifyParameters {
                candidate_labels: labels.candidates(),
                multi_label: false,
            },
        };

        let response = self
            .client
            .post(&self.config.inference_url)
            .bearer_auth(&self.config.api_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PulseError::UpstreamStatus {
                service: "classifier",
                status: response.status().as_u16(),
            });
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| PulseError::InvalidResponse(format!("classifier: {}", e)))?;

        tracing::debug!(
            "classifier ranked {} labels for a {}-char sequence",
            body.labels.len(),
            body.sequence.len()
        );

        body.into_result()
    }
}

#[async_trait]
impl SentimentScorer for ZeroShotClient {
    async fn classify(
        &self,
        labels: &LabelSet,
        text: &str,
    ) -> Result<SentimentResult, PulseError> {
        self.classify_text(labels, text).await
    }
}
