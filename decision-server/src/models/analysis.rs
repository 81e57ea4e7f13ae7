//! Analysis request/response models

use std::collections::BTreeMap;

use decision_core::{Decision, Label, RiskSignal};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Raw text to analyze
    pub text: String,

    /// Optional confidence threshold override in [0, 1]
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_threshold: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub label: Label,
    pub decision: Decision,
    pub confidence: f64,
    pub margin: f64,
    pub risk_score: usize,
    pub risk_signals: Vec<RiskSignal>,
    pub explanation: String,
    pub model_name: String,
    pub scores: BTreeMap<Label, f64>,
}
