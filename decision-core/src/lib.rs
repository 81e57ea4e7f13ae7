//! Trust-Aware Decision Core
//!
//! Converts a text-classification result into a governed decision
//! (accept, or route to human review) plus a deterministic explanation.
//!
//! ```text
//!   text ──► TextClassifier ──► ClassificationResult
//!                                     │
//!                                     ▼
//!                              risk::evaluate ──► DecisionRecord
//!                                     │
//!                                     ▼
//!                             explain::explain ──► narrative
//! ```

pub mod error;
pub mod logic;

pub use error::{CoreError, CoreResult};
pub use logic::explain::explain;
pub use logic::model::{ClassificationResult, Label, ModelHandle, TextClassifier};
pub use logic::pipeline::{analyze, Analysis};
pub use logic::risk::{evaluate, evaluate_default, Decision, DecisionRecord, RiskSignal, RiskThresholds};
