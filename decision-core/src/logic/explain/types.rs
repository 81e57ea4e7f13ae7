use serde::{Deserialize, Serialize};

/// Narrative topics, in the order they are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Prediction,
    Confidence,
    Margin,
    Language,
    Signals,
    Verdict,
}

impl Topic {
    pub const ORDER: [Topic; 6] = [
        Topic::Prediction,
        Topic::Confidence,
        Topic::Margin,
        Topic::Language,
        Topic::Signals,
        Topic::Verdict,
    ];
}

/// One sentence of the narrative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub topic: Topic,
    pub text: String,
}

/// Full explanation, one sentence per topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub sentences: Vec<Sentence>,
}

impl Explanation {
    /// Sentences joined with single spaces
    pub fn narrative(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn sentence(&self, topic: Topic) -> Option<&str> {
        self.sentences
            .iter()
            .find(|s| s.topic == topic)
            .map(|s| s.text.as_str())
    }
}
