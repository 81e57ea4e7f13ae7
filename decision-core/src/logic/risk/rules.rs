//! Risk Rules & Thresholds
//!
//! Thresholds and lexical marker tables.
//! No aggregation logic here - constants and config only.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Default minimum confidence for a low-risk prediction
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Default minimum top-1/top-2 gap for a stable prediction
pub const DEFAULT_MARGIN_THRESHOLD: f64 = 0.2;

/// Risk score at or above which the case goes to human review
pub const REVIEW_THRESHOLD: usize = 2;

/// Policy knobs for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Below this confidence = low_confidence
    pub confidence: f64,
    /// Below this margin = low_margin
    pub margin: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE_THRESHOLD,
            margin: DEFAULT_MARGIN_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    /// Checked constructor. Rejects anything outside [0, 1], never clamps.
    pub fn new(confidence: f64, margin: f64) -> CoreResult<Self> {
        check_unit("confidence threshold", confidence)?;
        check_unit("margin threshold", margin)?;
        Ok(Self { confidence, margin })
    }

    /// Same margin, different confidence threshold
    pub fn with_confidence(self, confidence: f64) -> CoreResult<Self> {
        Self::new(confidence, self.margin)
    }
}

fn check_unit(name: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::ThresholdOutOfRange { name, value })
    }
}

// ============================================================================
// LEXICAL MARKERS
// ============================================================================

/// Versioned keyword table for lexical signals.
///
/// Markers are matched as lower-case substrings of the lower-cased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerTable {
    pub version: &'static str,
    /// Hedging phrases
    pub hedging: &'static [&'static str],
    /// Contrastive connectives, padded with spaces so they only match whole words
    pub contrast: &'static [&'static str],
    /// Interrogative punctuation
    pub question: &'static [&'static str],
}

impl MarkerTable {
    pub const V1: MarkerTable = MarkerTable {
        version: "v1",
        hedging: &[
            "maybe",
            "probably",
            "perhaps",
            "i think",
            "it seems",
            "sort of",
            "kind of",
            "a bit",
            "not sure",
            "unclear",
        ],
        contrast: &[" but ", " however ", " although ", " though ", " yet "],
        question: &["?"],
    };
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::V1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.confidence, 0.7);
        assert_eq!(thresholds.margin, 0.2);
        assert_eq!(REVIEW_THRESHOLD, 2);
    }

    #[test]
    fn test_checked_constructor_accepts_bounds() {
        assert!(RiskThresholds::new(0.0, 1.0).is_ok());
        assert!(RiskThresholds::new(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_checked_constructor_rejects_out_of_range() {
        assert!(matches!(
            RiskThresholds::new(1.5, 0.2),
            Err(CoreError::ThresholdOutOfRange { name: "confidence threshold", .. })
        ));
        assert!(matches!(
            RiskThresholds::new(0.7, -0.1),
            Err(CoreError::ThresholdOutOfRange { name: "margin threshold", .. })
        ));
        assert!(RiskThresholds::new(f64::NAN, 0.2).is_err());
    }

    #[test]
    fn test_with_confidence_keeps_margin() {
        let thresholds = RiskThresholds::default().with_confidence(0.9).unwrap();
        assert_eq!(thresholds.confidence, 0.9);
        assert_eq!(thresholds.margin, DEFAULT_MARGIN_THRESHOLD);
    }

    #[test]
    fn test_contrast_markers_are_padded() {
        for marker in MarkerTable::V1.contrast {
            assert!(marker.starts_with(' ') && marker.ends_with(' '));
        }
    }
}
