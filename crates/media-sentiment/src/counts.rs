use pulse_core::{Sentiment, SentimentPercentages};

/// Incremental tally across the three root sentiments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub total: u32,
}

impl SentimentCounts {
    pub fn record(&mut self, root: Sentiment) {
        match root {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, root: Sentiment) -> u32 {
        match root {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Percentage split, rounded to 2 decimals; all zero when nothing counted.
    pub fn percentages(&self) -> SentimentPercentages {
        SentimentPercentages {
            positive: percentage(self.positive, self.total),
            neutral: percentage(self.neutral, self.total),
            negative: percentage(self.negative, self.total),
        }
    }

    /// Root with the strictly-greatest count. Ties resolve to the earlier
    /// root in the fixed positive -> neutral -> negative order; None when
    /// nothing has been counted.
    pub fn dominant(&self) -> Option<Sentiment> {
        let mut dominant = None;
        let mut best = 0u32;
        for root in Sentiment::ALL {
            let count = self.count(root);
            if count > best {
                best = count;
                dominant = Some(root);
            }
        }
        dominant
    }
}

/// count/total × 100 rounded to 2 decimals; 0 when total is 0.
pub(crate) fn percentage(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
}
