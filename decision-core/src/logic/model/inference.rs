//! Inference Engine
//!
//! The classifier boundary. The risk layer only ever sees a
//! `ClassificationResult`; anything that can produce one plugs in here.

use std::collections::BTreeMap;

use crate::error::CoreResult;
use super::lexicon::{Lexicon, NEGATIONS};
use super::types::{ClassificationResult, Label};

/// Default token budget per prediction
pub const DEFAULT_MAX_TOKENS: usize = 256;

/// Name reported by the built-in classifier
pub const LEXICON_MODEL_NAME: &str = "lexicon-sst2-english";

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trait for text classifiers (lexicon, ONNX, remote, ...)
pub trait TextClassifier: Send + Sync {
    fn model_name(&self) -> &str;

    /// Classify `text`, looking at no more than `max_tokens` tokens.
    fn predict(&self, text: &str, max_tokens: usize) -> CoreResult<ClassificationResult>;
}

// ============================================================================
// LEXICON IMPLEMENTATION
// ============================================================================

/// Deterministic polarity-lexicon classifier.
///
/// Sums word polarities (a preceding negation flips the next word), then
/// maps the total through a two-class softmax.
pub struct LexiconClassifier {
    name: String,
    lexicon: Lexicon,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new(LEXICON_MODEL_NAME)
    }
}

impl LexiconClassifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lexicon: Lexicon::default(),
        }
    }

    /// Net polarity of the first `max_tokens` tokens
    pub fn polarity(&self, text: &str, max_tokens: usize) -> f64 {
        let lower = text.to_lowercase();
        let mut total = 0.0f64;
        let mut negate = false;

        for token in tokenize(&lower).take(max_tokens) {
            if NEGATIONS.contains(&token) {
                negate = true;
                continue;
            }

            if let Some(weight) = self.lexicon.weight(token) {
                total += if negate { -weight } else { weight };
            }
            negate = false;
        }

        total
    }
}

impl TextClassifier for LexiconClassifier {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn predict(&self, text: &str, max_tokens: usize) -> CoreResult<ClassificationResult> {
        let polarity = self.polarity(text, max_tokens);
        let (positive, negative) = softmax_pair(polarity, 0.0);

        let scores = BTreeMap::from([(Label::Positive, positive), (Label::Negative, negative)]);
        let result = ClassificationResult::from_scores(scores)?;

        log::trace!(
            "lexicon predict: polarity={:.3} label={} confidence={:.3}",
            polarity,
            result.label,
            result.confidence
        );

        Ok(result)
    }
}

/// Split on anything that is not alphanumeric or an apostrophe
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
}

/// Numerically stable softmax over two logits
fn softmax_pair(a: f64, b: f64) -> (f64, f64) {
    let max = a.max(b);
    let ea = (a - max).exp();
    let eb = (b - max).exp();
    let sum = ea + eb;
    (ea / sum, eb / sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let model = LexiconClassifier::default();
        let result = model.predict("I love this product, it is great", DEFAULT_MAX_TOKENS).unwrap();
        assert_eq!(result.label, Label::Positive);
        assert!(result.confidence > 0.9);
    }

    #[test]
    fn test_negative_text() {
        let model = LexiconClassifier::default();
        let result = model.predict("Terrible service, awful food", DEFAULT_MAX_TOKENS).unwrap();
        assert_eq!(result.label, Label::Negative);
        assert!(result.confidence > 0.9);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let model = LexiconClassifier::default();
        assert!(model.polarity("good", DEFAULT_MAX_TOKENS) > 0.0);
        assert!(model.polarity("not good", DEFAULT_MAX_TOKENS) < 0.0);
        assert!(model.polarity("isn't good", DEFAULT_MAX_TOKENS) < 0.0);
    }

    #[test]
    fn test_neutral_text_is_even() {
        let model = LexiconClassifier::default();
        let result = model.predict("The package arrived on Tuesday", DEFAULT_MAX_TOKENS).unwrap();
        assert_eq!(result.label, Label::Positive);
        assert!((result.confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_truncates_to_token_budget() {
        let model = LexiconClassifier::default();
        // Only "the" is seen with a budget of one token
        assert_eq!(model.polarity("the awful awful awful", 1), 0.0);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let model = LexiconClassifier::default();
        let result = model.predict("good but bad and awful", DEFAULT_MAX_TOKENS).unwrap();
        let sum: f64 = result.scores.values().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
}
