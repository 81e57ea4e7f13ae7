//! Risk Types
//!
//! Core types for risk assessment.
//! Data structures only - the logic lives in `engine`.

use serde::{Deserialize, Serialize};

// ============================================================================
// DECISION
// ============================================================================

/// Final outcome for a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Prediction can be used without a human in the loop
    Accepted,
    /// At least two risk signals fired
    NeedsHumanReview,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accepted => "accepted",
            Decision::NeedsHumanReview => "needs_human_review",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK SIGNALS
// ============================================================================

/// Named weak signal. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSignal {
    LowConfidence,
    LowMargin,
    Ambiguity,
    MixedSentiment,
}

impl RiskSignal {
    pub const ORDER: [RiskSignal; 4] = [
        RiskSignal::LowConfidence,
        RiskSignal::LowMargin,
        RiskSignal::Ambiguity,
        RiskSignal::MixedSentiment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskSignal::LowConfidence => "low_confidence",
            RiskSignal::LowMargin => "low_margin",
            RiskSignal::Ambiguity => "ambiguity",
            RiskSignal::MixedSentiment => "mixed_sentiment",
        }
    }
}

impl std::fmt::Display for RiskSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// LEXICAL CUES
// ============================================================================

/// Which marker families matched in the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalCues {
    pub hedging: bool,
    pub contrast: bool,
    pub question: bool,
}

impl LexicalCues {
    pub fn ambiguous_language(&self) -> bool {
        self.hedging || self.contrast || self.question
    }

    /// Contrast and questions count as conflicting signal; hedging alone does not
    pub fn mixed_sentiment(&self) -> bool {
        self.contrast || self.question
    }
}

// ============================================================================
// DECISION RECORD
// ============================================================================

/// Result of risk assessment for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub decision: Decision,
    /// Confidence threshold in effect
    pub threshold: f64,
    /// Gap between top-1 and top-2 scores
    pub margin: f64,
    /// Stability threshold in effect
    pub margin_threshold: f64,
    /// Always `risk_signals.len()`
    pub risk_score: usize,
    pub low_confidence: bool,
    pub low_margin: bool,
    pub ambiguous_language: bool,
    pub mixed_sentiment: bool,
    pub risk_signals: Vec<RiskSignal>,
}

impl DecisionRecord {
    pub fn needs_review(&self) -> bool {
        self.decision == Decision::NeedsHumanReview
    }

    /// Wire names of the triggered signals, in order
    pub fn signal_names(&self) -> Vec<&'static str> {
        self.risk_signals.iter().map(RiskSignal::as_str).collect()
    }
}
