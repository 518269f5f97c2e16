use async_trait::async_trait;
use chrono::NaiveDate;
use pulse_core::{Article, ArticleSource, PulseError, PulseResult, SortOrder};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_SEARCH_URL: &str = "https://gnews.io/api/v4/search";

/// Every search is scoped to this language.
const LANGUAGE: &str = "en";

/// Configuration for the article-search provider.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    pub api_key: String,
    pub search_url: String,
}

impl NewsConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    config: NewsConfig,
}

impl NewsClient {
    pub fn new(config: NewsConfig) -> Self {
        // Transport defaults only; upstream calls carry no request timeout.
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_query(
        &self,
        topic: &str,
        sort: SortOrder,
        from: Option<NaiveDate>,
        max: u32,
    ) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("q", topic.to_string()),
            ("lang", LANGUAGE.to_string()),
            ("max", max.to_string()),
            ("sort", sort.as_query_value().to_string()),
        ];
        if let Some(date) = from {
            query.push(("from", date.format("%Y-%m-%d").to_string()));
        }
        query.push(("token", self.config.api_key.clone()));
        query
    }

    /// Search articles about a topic.
    pub async fn search_articles(
        &self,
        topic: &str,
        sort: SortOrder,
        from: Option<NaiveDate>,
        max: u32,
    ) -> PulseResult<Vec<Article>> {
        let response = self
            .client
            .get(&self.config.search_url)
            .query(&self.build_query(topic, sort, from, max))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PulseError::UpstreamStatus {
                service: "news search",
                status: response.status().as_u16(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| PulseError::InvalidResponse(format!("news search: {}", e)))?;

        tracing::debug!(
            "news search returned {} of {} matching articles",
            body.articles.len(),
            body.total_articles
        );

        Ok(body.articles)
    }
}

#[async_trait]
impl ArticleSource for NewsClient {
    async fn search(
        &self,
        topic: &str,
        sort: SortOrder,
        from: Option<NaiveDate>,
        max: u32,
    ) -> Result<Vec<Article>, PulseError> {
        self.search_articles(topic, sort, from, max).await
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default, rename = "totalArticles")]
    total_articles: u64,
    #[serde(default)]
    articles: Vec<Article>,
}
