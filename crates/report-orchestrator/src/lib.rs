//! Two-pass media-sentiment report assembly.

use std::sync::Arc;

use chrono::{Months, Utc};
use media_sentiment::{MonthlyAggregator, RecencyAggregator};
use pulse_core::{
    ArticleSource, LabelSet, MediaReport, PulseError, PulseResult, SentimentScorer, SortOrder,
};

/// Most articles requested from the provider per pass.
const MAX_ARTICLES: u32 = 100;

/// How far back the relevance pass reaches, in calendar years.
const RELEVANCE_YEARS: u32 = 3;

pub struct ReportOrchestrator {
    source: Arc<dyn ArticleSource>,
    scorer: Arc<dyn SentimentScorer>,
}

impl ReportOrchestrator {
    pub fn new(source: Arc<dyn ArticleSource>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { source, scorer }
    }

    /// Build the full media-sentiment report for one topic.
    ///
    /// Two strictly sequential passes over the article provider: a
    /// relevance-ranked pass feeding the monthly buckets, then a
    /// recency-ranked pass feeding the 30-day pulse. Each classification is
    /// awaited before the next is issued, and any upstream failure aborts
    /// the whole report.
    pub async fn build_report(&self, topic: &str) -> PulseResult<MediaReport> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PulseError::Validation("Missing topic".to_string()));
        }

        let labels = LabelSet::for_topic(topic);
        let now = Utc::now();

        tracing::info!("building media report for '{}'", topic);

        // Relevance pass, reaching three calendar years back at day precision
        let from = (now - Months::new(12 * RELEVANCE_YEARS)).date_naive();
        let articles = self
            .source
            .search(topic, SortOrder::Relevance, Some(from), MAX_ARTICLES)
            .await?;
        if articles.is_empty() {
            return Err(PulseError::NotFound("No articles found".to_string()));
        }
        tracing::info!("relevance pass: {} articles returned", articles.len());

        let mut monthly = MonthlyAggregator::new(labels.clone());
        for article in articles {
            let Some(text) = article.usable_text() else {
                continue;
            };
            let analysis = self.scorer.classify(&labels, text).await?;
            monthly.record(article, analysis)?;
        }
        tracing::debug!(
            "relevance pass: {} articles classified",
            monthly.eligible_count()
        );

        // Recency pass, unbounded window, provider-side publish-time order
        let recent = self
            .source
            .search(topic, SortOrder::PublishedAt, None, MAX_ARTICLES)
            .await?;
        tracing::info!("recency pass: {} articles returned", recent.len());

        let mut pulse = RecencyAggregator::new(labels.clone(), now);
        for article in &recent {
            let Some(text) = article.usable_text() else {
                continue;
            };
            let analysis = self.scorer.classify(&labels, text).await?;
            pulse.record(article, &analysis)?;
        }

        let (monthly_percentages, results) = monthly.finish();
        let summary_recent = pulse.finish();
        let most_recent_article = results.first().cloned();

        Ok(MediaReport {
            summary_recent,
            monthly_percentages,
            results,
            most_recent_article,
        })
    }
}
