//! Risk Module
//!
//! Decides whether a prediction can be accepted or must go to a human.
//! This is the CORE STEP - weak signals in, one auditable decision out.
//!
//! ## Structure
//! - `types`: Core types (Decision, RiskSignal, DecisionRecord, LexicalCues)
//! - `rules`: Thresholds, review gate constant, marker tables
//! - `engine`: Evaluation logic
//!
//! ## Usage
//! ```ignore
//! use decision_core::logic::risk::{evaluate, RiskThresholds, Decision};
//!
//! let record = evaluate(text, &result, &RiskThresholds::default());
//! match record.decision {
//!     Decision::Accepted => println!("Automate"),
//!     Decision::NeedsHumanReview => println!("Escalate"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod engine;

pub use types::{Decision, DecisionRecord, LexicalCues, RiskSignal};

pub use rules::{
    MarkerTable,
    RiskThresholds,
    DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_MARGIN_THRESHOLD,
    REVIEW_THRESHOLD,
};

pub use engine::{compute_margin, detect_cues, evaluate, evaluate_default, evaluate_with_markers, gate};
