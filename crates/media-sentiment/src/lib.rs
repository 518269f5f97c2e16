//! Sentiment aggregation engines for media reports.
//!
//! Two request-scoped accumulators: [`MonthlyAggregator`] buckets a
//! relevance-ranked article stream by calendar month, and
//! [`RecencyAggregator`] condenses a recency-ranked stream into a trailing
//! 30-day pulse. Both resolve classifier labels through the request's
//! [`pulse_core::LabelSet`] rather than parsing label strings.

pub mod counts;
pub mod monthly;
pub mod recency;

pub use counts::SentimentCounts;
pub use monthly::MonthlyAggregator;
pub use recency::{RecencyAggregator, RECENT_WINDOW_DAYS};
