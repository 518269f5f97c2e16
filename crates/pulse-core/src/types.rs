use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels::Sentiment;

/// News article as returned by the search provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    /// Provider source block, passed through untouched.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub source: serde_json::Value,
}

impl Article {
    /// Text worth classifying: description, else content.
    /// None when both are missing or whitespace-only.
    pub fn usable_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .or_else(|| {
                self.content
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
            })
    }

    /// UTC year-month bucket key, e.g. "2024-03".
    pub fn month_key(&self) -> String {
        self.published_at.format("%Y-%m").to_string()
    }
}

/// Zero-shot classification outcome for one text.
///
/// `labels` and `scores` are parallel, most-confident first, exactly as the
/// provider returned them. `top_label` is `labels[0]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SentimentResult {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
    pub sequence: String,
    #[serde(rename = "topLabel")]
    pub top_label: String,
}

/// One relevance-pass article paired with its classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ArticleAnalysis {
    pub article: Article,
    pub analysis: SentimentResult,
}

/// Percentage split across the three roots, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SentimentPercentages {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

/// Rolling sentiment summary over the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecentPulse {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub percentages: SentimentPercentages,
    pub total: u32,
    /// None serializes as an explicit null when the window is empty.
    #[serde(rename = "dominantSentiment")]
    pub dominant_sentiment: Option<Sentiment>,
    #[serde(rename = "windowDays")]
    pub window_days: u32,
}

/// Combined media-sentiment report for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MediaReport {
    pub summary_recent: RecentPulse,
    pub monthly_percentages: BTreeMap<String, SentimentPercentages>,
    pub results: Vec<ArticleAnalysis>,
    /// First element of `results`; omitted entirely when there are none.
    #[serde(
        rename = "mostRecentArticle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub most_recent_article: Option<ArticleAnalysis>,
}

/// Search ranking requested from the article provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    PublishedAt,
}

impl SortOrder {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PublishedAt => "publishedAt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(description: Option<&str>, content: Option<&str>) -> Article {
        Article {
            title: "headline".to_string(),
            description: description.map(String::from),
            content: content.map(String::from),
            url: "https://example.com/a".to_string(),
            image: None,
            published_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap(),
            source: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_usable_text_prefers_description() {
        let a = article(Some("summary"), Some("body"));
        assert_eq!(a.usable_text(), Some("summary"));
    }

    #[test]
    fn test_usable_text_falls_back_to_content() {
        assert_eq!(article(None, Some("body")).usable_text(), Some("body"));
        assert_eq!(article(Some("   "), Some("body")).usable_text(), Some("body"));
        assert_eq!(article(Some(""), Some("body")).usable_text(), Some("body"));
    }

    #[test]
    fn test_usable_text_blank_when_both_missing() {
        assert_eq!(article(None, None).usable_text(), None);
        assert_eq!(article(Some(" "), Some("\t\n")).usable_text(), None);
    }

    #[test]
    fn test_month_key_is_utc_year_month() {
        assert_eq!(article(None, None).month_key(), "2024-03");
    }

    #[test]
    fn test_article_parses_provider_payload() {
        let raw = r#"{
            "title": "Grid batteries surge",
            "description": "Storage deployments doubled.",
            "content": "Full text...",
            "url": "https://news.example.com/grid",
            "image": "https://news.example.com/grid.jpg",
            "publishedAt": "2024-01-15T10:00:00Z",
            "source": {"name": "Example Wire", "url": "https://news.example.com"}
        }"#;
        let a: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(a.month_key(), "2024-01");
        assert_eq!(a.usable_text(), Some("Storage deployments doubled."));
        assert_eq!(a.source["name"], "Example Wire");
    }

    #[test]
    fn test_article_tolerates_sparse_payload() {
        let raw = r#"{"publishedAt": "2023-11-02T00:00:00Z"}"#;
        let a: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(a.title, "");
        assert_eq!(a.usable_text(), None);
        assert!(a.source.is_null());
    }

    #[test]
    fn test_sentiment_result_wire_shape() {
        let result = SentimentResult {
            labels: vec!["positive about x".to_string()],
            scores: vec![0.9],
            sequence: "text".to_string(),
            top_label: "positive about x".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("topLabel").is_some());
        assert!(json.get("top_label").is_none());
    }
}
