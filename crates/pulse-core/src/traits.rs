use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{Article, LabelSet, PulseError, SentimentResult, SortOrder};

/// Trait for remote article-search providers
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn search(
        &self,
        topic: &str,
        sort: SortOrder,
        from: Option<NaiveDate>,
        max: u32,
    ) -> Result<Vec<Article>, PulseError>;
}

/// Trait for remote zero-shot sentiment classifiers
#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn classify(&self, labels: &LabelSet, text: &str)
        -> Result<SentimentResult, PulseError>;
}
