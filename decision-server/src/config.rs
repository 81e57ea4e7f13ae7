//! Configuration module

use std::env;
use std::str::FromStr;

use decision_core::logic::model::{DEFAULT_MAX_TOKENS, LEXICON_MODEL_NAME};
use decision_core::logic::risk::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MARGIN_THRESHOLD};
use decision_core::{CoreResult, RiskThresholds};

/// Longest accepted input, in characters
pub const DEFAULT_MAX_TEXT_CHARS: usize = 4000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Default confidence threshold when a request omits one
    pub confidence_threshold: f64,

    /// Margin (stability) threshold
    pub margin_threshold: f64,

    /// Maximum input length in characters, after trimming
    pub max_text_chars: usize,

    /// Token budget handed to the classifier
    pub max_tokens: usize,

    /// Classifier identifier reported in responses
    pub model_name: String,

    /// Load the classifier at startup instead of on first request
    pub preload_model: bool,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            margin_threshold: DEFAULT_MARGIN_THRESHOLD,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            max_tokens: DEFAULT_MAX_TOKENS,
            model_name: LEXICON_MODEL_NAME.to_string(),
            preload_model: true,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            confidence_threshold: parse_var("CONFIDENCE_THRESHOLD")
                .unwrap_or(defaults.confidence_threshold),
            margin_threshold: parse_var("MARGIN_THRESHOLD").unwrap_or(defaults.margin_threshold),
            max_text_chars: parse_var("MAX_TEXT_CHARS").unwrap_or(defaults.max_text_chars),
            max_tokens: parse_var("MAX_TOKENS").unwrap_or(defaults.max_tokens),
            model_name: env::var("MODEL_NAME").unwrap_or(defaults.model_name),
            preload_model: parse_var("PRELOAD_MODEL").unwrap_or(defaults.preload_model),
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Validated thresholds. Out-of-range values are an error, not clamped.
    pub fn risk_thresholds(&self) -> CoreResult<RiskThresholds> {
        RiskThresholds::new(self.confidence_threshold, self.margin_threshold)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
