use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root sentiment a candidate label resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Fixed order used everywhere the three roots are iterated or compared.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// The three candidate labels for one topic plus the label -> root table.
///
/// Templates and table are built in the same place so the wording sent to
/// the classifier and the mapping used for bucketing cannot drift apart.
#[derive(Debug, Clone)]
pub struct LabelSet {
    candidates: [String; 3],
    roots: HashMap<String, Sentiment>,
}

impl LabelSet {
    pub fn for_topic(topic: &str) -> Self {
        let candidates = [
            format!("positive about {}", topic),
            format!("neutral toward {}", topic),
            format!("negative about {}", topic),
        ];
        let roots = candidates.iter().cloned().zip(Sentiment::ALL).collect();
        Self { candidates, roots }
    }

    /// Candidate labels in template order (positive, neutral, negative).
    pub fn candidates(&self) -> &[String; 3] {
        &self.candidates
    }

    /// Root sentiment for a label this set produced; None for anything else.
    pub fn root_of(&self, label: &str) -> Option<Sentiment> {
        self.roots.get(label).copied()
    }
}
