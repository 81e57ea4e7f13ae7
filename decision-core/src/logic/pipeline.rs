//! Analysis Pipeline
//!
//! Risk evaluation followed by explanation, bundled for the boundary.

use serde::Serialize;

use super::explain;
use super::model::ClassificationResult;
use super::risk::{self, DecisionRecord, RiskThresholds};

/// Decision plus narrative for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub record: DecisionRecord,
    pub explanation: String,
}

pub fn analyze(text: &str, result: &ClassificationResult, thresholds: &RiskThresholds) -> Analysis {
    let record = risk::evaluate(text, result, thresholds);
    let explanation = explain::explain(text, result, &record);
    Analysis { record, explanation }
}
