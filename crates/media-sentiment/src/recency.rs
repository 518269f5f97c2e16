//! Trailing-window sentiment pulse for the recency pass.

use chrono::{DateTime, Duration, Utc};
use pulse_core::{Article, LabelSet, PulseError, PulseResult, RecentPulse, SentimentResult};

use crate::counts::SentimentCounts;

/// Length of the trailing window, in days.
pub const RECENT_WINDOW_DAYS: u32 = 30;

/// Counts root sentiments for articles published inside the trailing window.
///
/// Articles arrive already classified; the window filter applies at count
/// time, so an out-of-window article is recorded as a no-op rather than an
/// error.
pub struct RecencyAggregator {
    labels: LabelSet,
    cutoff: DateTime<Utc>,
    counts: SentimentCounts,
}

impl RecencyAggregator {
    /// `now` anchors the window: anything published at or after
    /// `now - 30 days` counts (inclusive lower bound).
    pub fn new(labels: LabelSet, now: DateTime<Utc>) -> Self {
        Self {
            labels,
            cutoff: now - Duration::days(RECENT_WINDOW_DAYS as i64),
            counts: SentimentCounts::default(),
        }
    }

    /// Count one scored article if it falls inside the window.
    pub fn record(&mut self, article: &Article, analysis: &SentimentResult) -> PulseResult<()> {
        if article.usable_text().is_none() {
            return Ok(());
        }

        let root = self.labels.root_of(&analysis.top_label).ok_or_else(|| {
            PulseError::InvalidResponse(format!("unknown top label: {}", analysis.top_label))
        })?;

        if article.published_at >= self.cutoff {
            self.counts.record(root);
        }
        Ok(())
    }

    /// Close the window and produce the pulse summary.
    pub fn finish(self) -> RecentPulse {
        let dominant = self.counts.dominant();
        tracing::debug!(
            "recency pulse: {} articles inside the {}-day window, dominant {}",
            self.counts.total,
            RECENT_WINDOW_DAYS,
            dominant.map(|root| root.as_str()).unwrap_or("none")
        );

        RecentPulse {
            positive: self.counts.positive,
            neutral: self.counts.neutral,
            negative: self.counts.negative,
            percentages: self.counts.percentages(),
            total: self.counts.total,
            dominant_sentiment: dominant,
            window_days: RECENT_WINDOW_DAYS,
        }
    }
}
