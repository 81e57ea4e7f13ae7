use super::types::{Explanation, Sentence, Topic};
use crate::logic::model::ClassificationResult;
use crate::logic::risk::{Decision, DecisionRecord, REVIEW_THRESHOLD};

/// Narrative for a decision, one sentence per topic joined by spaces.
///
/// Pure: identical inputs give an identical string.
pub fn explain(text: &str, result: &ClassificationResult, record: &DecisionRecord) -> String {
    build(text, result, record).narrative()
}

/// Structured form of [`explain`]
pub fn build(_text: &str, result: &ClassificationResult, record: &DecisionRecord) -> Explanation {
    let sentences = Topic::ORDER
        .iter()
        .map(|&topic| Sentence {
            topic,
            text: write_topic(topic, result, record),
        })
        .collect();

    Explanation { sentences }
}

fn write_topic(topic: Topic, result: &ClassificationResult, record: &DecisionRecord) -> String {
    match topic {
        Topic::Prediction => format!(
            "The model predicted {} with confidence {:.2}.",
            result.label, result.confidence
        ),
        Topic::Confidence => confidence_sentence(record),
        Topic::Margin => margin_sentence(record),
        Topic::Language => language_sentence(record).to_string(),
        Topic::Signals => signals_sentence(record),
        Topic::Verdict => verdict_sentence(record),
    }
}

fn confidence_sentence(record: &DecisionRecord) -> String {
    if record.low_confidence {
        format!(
            "Confidence is below the operating threshold of {:.2}, which raises the risk \
             that the prediction is wrong.",
            record.threshold
        )
    } else {
        format!(
            "Confidence is above the operating threshold of {:.2}, but confidence alone \
             is not enough to automate the decision.",
            record.threshold
        )
    }
}

fn margin_sentence(record: &DecisionRecord) -> String {
    if record.low_margin {
        format!(
            "The top classes are close in score (margin {:.2}, below the stability \
             threshold of {:.2}), so the prediction is treated as unstable even if \
             confidence is high.",
            record.margin, record.margin_threshold
        )
    } else {
        format!(
            "The margin between the top classes is {:.2}, above the stability threshold \
             of {:.2}, which shows a clear preference for the predicted label.",
            record.margin, record.margin_threshold
        )
    }
}

fn language_sentence(record: &DecisionRecord) -> &'static str {
    match (record.ambiguous_language, record.mixed_sentiment) {
        (true, true) => {
            "The text uses hedging or contrastive phrasing and expresses mixed views, \
             which is read as linguistic ambiguity."
        }
        (true, false) => {
            "The text contains hedging, questions or contrastive phrasing, which are \
             treated as signs of ambiguity."
        }
        // Not produced by MarkerTable::V1, kept for other marker tables
        (false, true) => {
            "The text expresses conflicting views, which is treated as a mixed or \
             uncertain sentiment signal."
        }
        (false, false) => {
            "The text shows no strong ambiguity patterns such as hedging or contrastive \
             phrasing."
        }
    }
}

fn signals_sentence(record: &DecisionRecord) -> String {
    if record.risk_signals.is_empty() {
        "No risk signals were triggered for this input, so the model's confidence and \
         score margin are considered reliable here."
            .to_string()
    } else {
        format!(
            "Triggered risk signals: {}. These signals mean the model's raw confidence \
             should not be trusted on its own.",
            record.signal_names().join(", ")
        )
    }
}

fn verdict_sentence(record: &DecisionRecord) -> String {
    match record.decision {
        Decision::NeedsHumanReview => format!(
            "The risk signals add up to a risk score of {}, which meets or exceeds the \
             review threshold of {}. To avoid overconfident automation, this case is \
             deferred to human review.",
            record.risk_score, REVIEW_THRESHOLD
        ),
        Decision::Accepted if record.risk_score == 0 => {
            "Overall risk is low, so the system is comfortable accepting this prediction \
             automatically."
                .to_string()
        }
        Decision::Accepted => format!(
            "The risk score is {}, below the review threshold of {}, so the prediction is \
             accepted while still putting safety ahead of raw confidence.",
            record.risk_score, REVIEW_THRESHOLD
        ),
    }
}
