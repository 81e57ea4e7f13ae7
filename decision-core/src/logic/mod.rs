//! Logic Module - Decision Engines
//!
//! ## Architecture
//! - `model/` - Classifier boundary (label space, inference trait, handle)
//! - `risk/` - Risk signals, aggregation and the review gate
//! - `explain/` - Narrative generation for a decision
//! - `pipeline` - Risk + explanation in one call

pub mod model;
pub mod risk;
pub mod explain;
pub mod pipeline;

#[cfg(test)]
mod tests;
