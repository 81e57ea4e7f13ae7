//! Analysis handler

use axum::{extract::State, Json};
use decision_core::analyze as run_analysis;
use uuid::Uuid;
use validator::Validate;

use crate::{AppState, AppResult, AppError};
use crate::models::{AnalyzeRequest, AnalyzeResponse};

/// Classify text and return a trust-aware decision
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> AppResult<Json<AnalyzeResponse>> {
    req.validate()?;

    let text = req.text.trim();
    if text.is_empty() {
        return Err(AppError::ValidationError("Text input cannot be empty.".to_string()));
    }

    let max_chars = state.config.max_text_chars;
    if text.chars().count() > max_chars {
        return Err(AppError::ValidationError(format!(
            "Text input is too long. Please provide a shorter snippet (<= {} characters).",
            max_chars
        )));
    }

    let thresholds = match req.confidence_threshold {
        Some(threshold) => state.thresholds.with_confidence(threshold)?,
        None => state.thresholds,
    };

    let request_id = Uuid::new_v4();

    // Inference is CPU-bound; keep it off the async workers
    let model = state.model.clone();
    let max_tokens = state.config.max_tokens;
    let input = text.to_string();
    let (result, model_name) = tokio::task::spawn_blocking(move || {
        let classifier = model.get();
        classifier
            .predict(&input, max_tokens)
            .map(|result| (result, classifier.model_name().to_string()))
    })
    .await??;

    let analysis = run_analysis(text, &result, &thresholds);
    let record = analysis.record;

    tracing::info!(
        %request_id,
        label = %result.label,
        confidence = result.confidence,
        risk_score = record.risk_score,
        decision = %record.decision,
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        label: result.label,
        decision: record.decision,
        confidence: result.confidence,
        margin: record.margin,
        risk_score: record.risk_score,
        risk_signals: record.risk_signals,
        explanation: analysis.explanation,
        model_name,
        scores: result.scores,
    }))
}
