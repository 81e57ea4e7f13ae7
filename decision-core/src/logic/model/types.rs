//! Classification Types
//!
//! Data contracts shared between the classifier and the risk layer.
//! No logic beyond construction and validation.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ============================================================================
// LABEL SPACE
// ============================================================================

/// Sentiment categories produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Positive, Label::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "POSITIVE",
            Label::Negative => "NEGATIVE",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Label {
    type Err = CoreError;

    /// Case-insensitive. Generic ids such as `LABEL_1` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(Label::Positive),
            "NEGATIVE" => Ok(Label::Negative),
            _ => Err(CoreError::UnknownLabel(s.to_string())),
        }
    }
}

// ============================================================================
// CLASSIFICATION RESULT (from the classifier)
// ============================================================================

/// Raw output of a single classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Argmax category
    pub label: Label,
    /// Probability assigned to `label` (0.0 - 1.0)
    pub confidence: f64,
    /// Full distribution, one entry per category
    pub scores: BTreeMap<Label, f64>,
}

impl ClassificationResult {
    /// Build a result from a score distribution, picking the argmax.
    ///
    /// Ties go to the first label in key order.
    pub fn from_scores(scores: BTreeMap<Label, f64>) -> CoreResult<Self> {
        for (label, &value) in &scores {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(CoreError::InvalidProbability {
                    label: label.to_string(),
                    value,
                });
            }
        }

        let (label, confidence) = scores
            .iter()
            .fold(None, |best: Option<(Label, f64)>, (&label, &value)| match best {
                Some((_, top)) if top >= value => best,
                _ => Some((label, value)),
            })
            .ok_or(CoreError::EmptyScores)?;

        Ok(Self {
            label,
            confidence,
            scores,
        })
    }

    /// Score values sorted highest first
    pub fn ranked_scores(&self) -> Vec<f64> {
        let mut ordered: Vec<f64> = self.scores.values().copied().collect();
        ordered.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        ordered
    }
}
