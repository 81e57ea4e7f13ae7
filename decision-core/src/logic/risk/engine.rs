//! Risk Engine
//!
//! Turns a classification plus the input text into a `DecisionRecord`.
//! Input: text, ClassificationResult, RiskThresholds
//! Output: DecisionRecord
//!
//! Deterministic: every signal is a plain boolean, the score is their
//! count, and review needs at least `REVIEW_THRESHOLD` of them.

use super::rules::{MarkerTable, RiskThresholds, REVIEW_THRESHOLD};
use super::types::{Decision, DecisionRecord, LexicalCues, RiskSignal};
use crate::logic::model::ClassificationResult;

// ============================================================================
// MAIN EVALUATION FUNCTION
// ============================================================================

/// Evaluate with default thresholds
pub fn evaluate_default(text: &str, result: &ClassificationResult) -> DecisionRecord {
    evaluate(text, result, &RiskThresholds::default())
}

/// Evaluate with caller supplied thresholds and the current marker table
pub fn evaluate(
    text: &str,
    result: &ClassificationResult,
    thresholds: &RiskThresholds,
) -> DecisionRecord {
    evaluate_with_markers(text, result, thresholds, &MarkerTable::V1)
}

/// Evaluate against an explicit marker table
pub fn evaluate_with_markers(
    text: &str,
    result: &ClassificationResult,
    thresholds: &RiskThresholds,
    markers: &MarkerTable,
) -> DecisionRecord {
    let margin = compute_margin(result);

    // Numeric uncertainty
    let low_confidence = result.confidence < thresholds.confidence;
    let low_margin = margin < thresholds.margin;

    // Lexical uncertainty
    let cues = detect_cues(text, markers);
    let ambiguous_language = cues.ambiguous_language();
    let mixed_sentiment = cues.mixed_sentiment();

    let risk_signals: Vec<RiskSignal> = [
        (low_confidence, RiskSignal::LowConfidence),
        (low_margin, RiskSignal::LowMargin),
        (ambiguous_language, RiskSignal::Ambiguity),
        (mixed_sentiment, RiskSignal::MixedSentiment),
    ]
    .into_iter()
    .filter_map(|(fired, signal)| fired.then_some(signal))
    .collect();

    let risk_score = risk_signals.len();
    let decision = gate(risk_score);

    log::debug!(
        "risk evaluation: label={} confidence={:.3} margin={:.3} signals={:?} decision={}",
        result.label,
        result.confidence,
        margin,
        risk_signals,
        decision
    );

    DecisionRecord {
        decision,
        threshold: thresholds.confidence,
        margin,
        margin_threshold: thresholds.margin,
        risk_score,
        low_confidence,
        low_margin,
        ambiguous_language,
        mixed_sentiment,
        risk_signals,
    }
}

/// No single signal can force review on its own
pub fn gate(risk_score: usize) -> Decision {
    if risk_score >= REVIEW_THRESHOLD {
        Decision::NeedsHumanReview
    } else {
        Decision::Accepted
    }
}

// ============================================================================
// SIGNALS
// ============================================================================

/// Gap between the top two scores.
///
/// Empty = 0, a single category = its own score.
pub fn compute_margin(result: &ClassificationResult) -> f64 {
    match result.ranked_scores().as_slice() {
        [] => 0.0,
        [only] => *only,
        [first, second, ..] => first - second,
    }
}

/// Case-insensitive substring search for each marker family
pub fn detect_cues(text: &str, markers: &MarkerTable) -> LexicalCues {
    let lower = text.to_lowercase();
    let contains_any = |family: &[&str]| family.iter().any(|m| lower.contains(*m));

    LexicalCues {
        hedging: contains_any(markers.hedging),
        contrast: contains_any(markers.contrast),
        question: contains_any(markers.question),
    }
}

// ============================================================================
// TESTS
// ============================================================================
