//! Polarity lexicon for the built-in classifier

use std::collections::HashMap;

/// Words that flip the polarity of the token that follows
pub const NEGATIONS: &[&str] = &[
    "not", "no", "never", "isn't", "wasn't", "aren't", "don't", "doesn't", "didn't", "can't",
    "won't", "hardly",
];

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("love", 1.5),
    ("loved", 1.5),
    ("great", 1.5),
    ("excellent", 1.8),
    ("amazing", 1.8),
    ("awesome", 1.6),
    ("fantastic", 1.8),
    ("wonderful", 1.6),
    ("perfect", 1.6),
    ("good", 1.0),
    ("nice", 0.9),
    ("fine", 0.6),
    ("happy", 1.2),
    ("enjoy", 1.1),
    ("enjoyed", 1.1),
    ("like", 0.7),
    ("recommend", 1.2),
    ("helpful", 1.0),
    ("friendly", 1.0),
    ("fast", 0.6),
    ("best", 1.5),
    ("pleased", 1.1),
    ("satisfied", 1.0),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("hate", -1.5),
    ("hated", -1.5),
    ("terrible", -1.5),
    ("awful", -1.5),
    ("horrible", -1.8),
    ("worst", -1.8),
    ("bad", -1.0),
    ("poor", -1.0),
    ("disappointing", -1.3),
    ("disappointed", -1.3),
    ("broken", -1.1),
    ("slow", -0.6),
    ("rude", -1.2),
    ("useless", -1.4),
    ("waste", -1.2),
    ("annoying", -1.0),
    ("angry", -1.2),
    ("sad", -1.0),
    ("problem", -0.7),
    ("fail", -1.0),
    ("failed", -1.0),
    ("refund", -0.6),
];

/// Word to polarity weight mapping
pub struct Lexicon {
    words: HashMap<&'static str, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            words: POSITIVE_WORDS
                .iter()
                .chain(NEGATIVE_WORDS.iter())
                .copied()
                .collect(),
        }
    }
}

impl Lexicon {
    /// Polarity of a lower-cased token, if it carries any
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.words.get(token).copied()
    }
}
