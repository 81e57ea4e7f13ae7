//! Integration Tests for the decision pipeline
//!
//! Classifier, risk engine and explanation working together.

#[cfg(test)]
mod integration_tests {
    use std::collections::BTreeMap;

    use crate::logic::explain::{build, explain, Topic};
    use crate::logic::model::{
        ClassificationResult, Label, LexiconClassifier, ModelHandle, TextClassifier,
        DEFAULT_MAX_TOKENS,
    };
    use crate::logic::pipeline::analyze;
    use crate::logic::risk::{
        evaluate, evaluate_default, Decision, RiskSignal, RiskThresholds, REVIEW_THRESHOLD,
    };

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn binary(label: Label, pos: f64, neg: f64) -> ClassificationResult {
        let confidence = match label {
            Label::Positive => pos,
            Label::Negative => neg,
        };
        ClassificationResult {
            label,
            confidence,
            scores: BTreeMap::from([(Label::Positive, pos), (Label::Negative, neg)]),
        }
    }

    /// Confident positive, no cues at all
    #[test]
    fn test_scenario_confident_plain_text_is_accepted() {
        init_logging();
        let result = binary(Label::Positive, 0.95, 0.05);
        let record = evaluate_default("I love this product", &result);

        assert!((record.margin - 0.90).abs() < 1e-6);
        assert!(!record.low_confidence);
        assert!(!record.low_margin);
        assert!(!record.ambiguous_language);
        assert!(!record.mixed_sentiment);
        assert_eq!(record.risk_score, 0);
        assert!(record.risk_signals.is_empty());
        assert_eq!(record.decision, Decision::Accepted);
    }

    /// Every signal fires
    #[test]
    fn test_scenario_hedged_contrastive_text_needs_review() {
        init_logging();
        let result = binary(Label::Positive, 0.55, 0.45);
        let record = evaluate_default("Maybe it's fine, but I'm not sure", &result);

        assert!(record.low_confidence);
        assert!(record.low_margin);
        assert!(record.ambiguous_language);
        assert!(record.mixed_sentiment);
        assert_eq!(record.risk_score, 4);
        assert_eq!(record.risk_signals, RiskSignal::ORDER.to_vec());
        assert_eq!(record.decision, Decision::NeedsHumanReview);
    }

    /// A question mark alone yields two lexical signals
    #[test]
    fn test_scenario_question_forces_review_despite_confidence() {
        let result = binary(Label::Positive, 0.9, 0.1);
        let record = evaluate_default("Great service?", &result);

        assert!(!record.low_confidence);
        assert!(!record.low_margin);
        assert!(record.ambiguous_language);
        assert!(record.mixed_sentiment);
        assert_eq!(
            record.risk_signals,
            vec![RiskSignal::Ambiguity, RiskSignal::MixedSentiment]
        );
        assert_eq!(record.risk_score, 2);
        assert_eq!(record.decision, Decision::NeedsHumanReview);
    }

    #[test]
    fn test_scenario_empty_scores_mean_low_margin() {
        for margin_threshold in [0.01, 0.2, 1.0] {
            let result = ClassificationResult {
                label: Label::Positive,
                confidence: 0.99,
                scores: BTreeMap::new(),
            };
            let thresholds = RiskThresholds::new(0.7, margin_threshold).unwrap();
            let record = evaluate("plain text", &result, &thresholds);

            assert_eq!(record.margin, 0.0);
            assert!(record.low_margin);
            assert_eq!(record.risk_signals, vec![RiskSignal::LowMargin]);
        }
    }

    /// Invariants over a spread of texts and distributions
    #[test]
    fn test_record_invariants_hold() {
        let texts = [
            "",
            "Solid product",
            "I think so",
            "Good, however slow",
            "Is it good?",
            "Perhaps, though unclear?",
        ];
        let distributions = [(0.99, 0.01), (0.75, 0.25), (0.6, 0.4), (0.5, 0.5), (0.3, 0.7)];

        for text in texts {
            for (pos, neg) in distributions {
                let label = if pos >= neg { Label::Positive } else { Label::Negative };
                let record = evaluate_default(text, &binary(label, pos, neg));

                assert_eq!(record.risk_score, record.risk_signals.len());
                assert!(record.margin >= 0.0);
                if record.mixed_sentiment {
                    assert!(record.ambiguous_language, "subset broken for {:?}", text);
                }

                let expected: Vec<RiskSignal> = RiskSignal::ORDER
                    .into_iter()
                    .filter(|s| match s {
                        RiskSignal::LowConfidence => record.low_confidence,
                        RiskSignal::LowMargin => record.low_margin,
                        RiskSignal::Ambiguity => record.ambiguous_language,
                        RiskSignal::MixedSentiment => record.mixed_sentiment,
                    })
                    .collect();
                assert_eq!(record.risk_signals, expected);

                assert_eq!(
                    record.decision == Decision::NeedsHumanReview,
                    record.risk_score >= REVIEW_THRESHOLD
                );
            }
        }
    }

    /// Adding a signal can keep or escalate a decision, never relax it
    #[test]
    fn test_extra_signal_never_relaxes_decision() {
        let result = binary(Label::Positive, 0.65, 0.35);
        let base = evaluate_default("Solid product", &result);
        let with_question = evaluate_default("Solid product?", &result);

        assert!(with_question.risk_score > base.risk_score);
        if base.decision == Decision::NeedsHumanReview {
            assert_eq!(with_question.decision, Decision::NeedsHumanReview);
        }

        let stricter = RiskThresholds::new(0.99, 0.2).unwrap();
        let escalated = evaluate("Solid product", &binary(Label::Positive, 0.95, 0.05), &stricter);
        let relaxed = evaluate_default("Solid product", &binary(Label::Positive, 0.95, 0.05));
        assert!(escalated.risk_score >= relaxed.risk_score);
    }

    #[test]
    fn test_evaluate_and_explain_are_idempotent() {
        let result = binary(Label::Negative, 0.4, 0.6);
        let text = "Kind of slow, yet it works?";

        let first = evaluate_default(text, &result);
        let second = evaluate_default(text, &result);
        assert_eq!(first, second);

        assert_eq!(explain(text, &result, &first), explain(text, &result, &second));
    }

    #[test]
    fn test_explanation_mirrors_record() {
        let result = binary(Label::Positive, 0.55, 0.45);
        let text = "Maybe it's fine, but I'm not sure";
        let record = evaluate_default(text, &result);
        let explanation = build(text, &result, &record);

        assert_eq!(explanation.sentences.len(), 6);
        assert!(explanation
            .sentence(Topic::Signals)
            .unwrap()
            .contains("low_confidence, low_margin, ambiguity, mixed_sentiment"));
        assert!(explanation
            .sentence(Topic::Verdict)
            .unwrap()
            .contains("risk score of 4"));
    }

    #[test]
    fn test_pipeline_with_lexicon_classifier() {
        init_logging();
        let handle = ModelHandle::lexicon("lexicon-test");
        let classifier = handle.get();

        let text = "I love this product";
        let result = classifier.predict(text, DEFAULT_MAX_TOKENS).unwrap();
        let analysis = analyze(text, &result, &RiskThresholds::default());

        assert_eq!(result.label, Label::Positive);
        assert_eq!(analysis.record.decision, Decision::Accepted);
        assert!(analysis.explanation.starts_with("The model predicted POSITIVE"));
        assert_eq!(analysis.explanation, explain(text, &result, &analysis.record));
    }

    #[test]
    fn test_neutral_text_is_routed_to_review() {
        // Even split: low confidence and zero margin
        let model = LexiconClassifier::default();
        let text = "The package arrived on Tuesday";
        let result = model.predict(text, DEFAULT_MAX_TOKENS).unwrap();
        let record = evaluate_default(text, &result);

        assert_eq!(
            record.risk_signals,
            vec![RiskSignal::LowConfidence, RiskSignal::LowMargin]
        );
        assert_eq!(record.decision, Decision::NeedsHumanReview);
    }
}
