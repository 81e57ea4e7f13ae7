//! Explain Module
//!
//! Human-readable narrative for a `DecisionRecord`. Mirrors every branch of
//! the risk engine in prose, one sentence per topic.

pub mod types;
pub mod engine;

pub use types::{Explanation, Sentence, Topic};
pub use engine::{build, explain};
