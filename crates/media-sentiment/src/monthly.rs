//! Calendar-month sentiment bucketing for the relevance pass.

use std::collections::BTreeMap;

use pulse_core::{
    Article, ArticleAnalysis, LabelSet, PulseError, PulseResult, SentimentPercentages,
    SentimentResult,
};

use crate::counts::SentimentCounts;

/// Buckets scored articles by publish month and keeps the scored sequence.
///
/// State lives for a single report request. Buckets are created lazily on
/// first reference; months with no eligible article never appear in the
/// output, and counts are only ever incremented.
pub struct MonthlyAggregator {
    labels: LabelSet,
    buckets: BTreeMap<String, SentimentCounts>,
    results: Vec<ArticleAnalysis>,
}

impl MonthlyAggregator {
    pub fn new(labels: LabelSet) -> Self {
        Self {
            labels,
            buckets: BTreeMap::new(),
            results: Vec::new(),
        }
    }

    /// Fold one scored article into the monthly buckets.
    ///
    /// Articles without usable text contribute to neither buckets nor
    /// results. A top label the label set never produced is rejected as a
    /// malformed upstream response.
    pub fn record(&mut self, article: Article, analysis: SentimentResult) -> PulseResult<()> {
        if article.usable_text().is_none() {
            return Ok(());
        }

        let root = self.labels.root_of(&analysis.top_label).ok_or_else(|| {
            PulseError::InvalidResponse(format!("unknown top label: {}", analysis.top_label))
        })?;

        self.buckets
            .entry(article.month_key())
            .or_default()
            .record(root);
        self.results.push(ArticleAnalysis { article, analysis });
        Ok(())
    }

    /// Articles recorded so far (blank-text skips excluded).
    pub fn eligible_count(&self) -> usize {
        self.results.len()
    }

    /// Finish the pass: per-month percentage views plus the ordered results.
    pub fn finish(self) -> (BTreeMap<String, SentimentPercentages>, Vec<ArticleAnalysis>) {
        tracing::debug!(
            "monthly aggregation: {} articles across {} months",
            self.results.len(),
            self.buckets.len()
        );

        let monthly = self
            .buckets
            .into_iter()
            .map(|(month, counts)| (month, counts.percentages()))
            .collect();
        (monthly, self.results)
    }
}
