use anyhow::{Context, Result};
use crate::report::DEFAULT_REPORT_NUMBER;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Classifier (Gemini)
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub classify_timeout_secs: u64,

    // Translation (Lingo.dev). No key means static tables only.
    pub lingo_api_key: Option<String>,
    pub lingo_api_url: String,
    pub translate_timeout_secs: u64,

    // Reporting
    pub report_number: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Classifier
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .context("GEMINI_API_KEY not set")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            gemini_api_url: std::env::var("GEMINI_API_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            classify_timeout_secs: std::env::var("CLASSIFY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),

            // Translation
            lingo_api_key: std::env::var("LINGO_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            lingo_api_url: std::env::var("LINGO_API_URL")
                .unwrap_or_else(|_| "https://api.lingo.dev/v1/translate".to_string()),
            translate_timeout_secs: std::env::var("TRANSLATE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),

            // Al Ameen service short number
            report_number: std::env::var("REPORT_NUMBER")
                .unwrap_or_else(|_| DEFAULT_REPORT_NUMBER.to_string()),
        })
    }

    /// Full endpoint for a single `generateContent` call
    pub fn classify_endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.gemini_api_url.trim_end_matches('/'),
            self.gemini_model
        )
    }

    pub fn classify_timeout(&self) -> Duration {
        Duration::from_secs(self.classify_timeout_secs)
    }

    pub fn translate_timeout(&self) -> Duration {
        Duration::from_secs(self.translate_timeout_secs)
    }

    /// Whether dynamic translation is available at all
    pub fn translation_enabled(&self) -> bool {
        self.lingo_api_key.is_some()
    }
}
