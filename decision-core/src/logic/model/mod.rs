//! Model Module - Classifier boundary
//!
//! ## Structure
//! - `types`: Label space and `ClassificationResult`
//! - `inference`: `TextClassifier` trait and the built-in lexicon classifier
//! - `lexicon`: polarity word list
//! - `handle`: lazily loaded, shareable classifier handle

pub mod types;
pub mod lexicon;
pub mod inference;
pub mod handle;

pub use types::{ClassificationResult, Label};
pub use inference::{
    LexiconClassifier, TextClassifier, DEFAULT_MAX_TOKENS, LEXICON_MODEL_NAME,
};
pub use handle::ModelHandle;
