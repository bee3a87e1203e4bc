//! Configuration loaded once from the process environment.
//!
//! No other module reads environment variables. The loaded `Config` is an
//! immutable value object handed to `AnalysisService` at construction, which
//! keeps the whole pipeline testable without environment mocking.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the analysis core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub providers: ProviderSettings,
    pub analysis: AnalysisSettings,
}

/// Credentials and endpoints for the hosted analysis providers.
///
/// A `None` credential means the corresponding provider tier is skipped
/// entirely; with both absent the pipeline still runs on the local tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub huggingface_api_key: Option<String>,
    pub huggingface_model_url: String,
    pub timeout_ms: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o".to_string(),
            huggingface_api_key: None,
            huggingface_model_url:
                "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Tunables for the assessment and query layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Criterion validity cannot be computed from a lone transcript, so it is
    /// carried as a constant until external outcome data exists to score it.
    pub criterion_validity: f64,
    /// Response cap for follow-up question answering
    pub max_answer_tokens: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            criterion_validity: 7.0,
            max_answer_tokens: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for everything that is unset or unparseable.
    pub fn load_from_env() -> Self {
        let mut config = Config::default();

        config.providers.openai_api_key = non_empty_var("OPENAI_API_KEY");
        config.providers.huggingface_api_key = non_empty_var("HUGGINGFACE_API_KEY");

        if let Some(url) = non_empty_var("SCOPE_OPENAI_BASE_URL") {
            config.providers.openai_base_url = url;
        }
        if let Some(model) = non_empty_var("SCOPE_OPENAI_MODEL") {
            config.providers.openai_model = model;
        }
        if let Some(url) = non_empty_var("SCOPE_HF_MODEL_URL") {
            config.providers.huggingface_model_url = url;
        }
        if let Some(timeout) = std::env::var("SCOPE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.providers.timeout_ms = timeout.clamp(1_000, 300_000);
        }
        if let Some(criterion) = std::env::var("SCOPE_CRITERION_VALIDITY")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
        {
            config.analysis.criterion_validity = criterion.clamp(0.0, 10.0);
        }
        if let Some(tokens) = std::env::var("SCOPE_MAX_ANSWER_TOKENS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
        {
            config.analysis.max_answer_tokens = tokens;
        }

        config
    }

    /// True when at least one hosted provider credential is present
    pub fn has_hosted_provider(&self) -> bool {
        self.providers.openai_api_key.is_some() || self.providers.huggingface_api_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = Config::default();
        assert!(config.providers.openai_api_key.is_none());
        assert!(config.providers.huggingface_api_key.is_none());
        assert!(!config.has_hosted_provider());
    }

    #[test]
    fn default_criterion_validity_is_moderate() {
        let config = Config::default();
        assert_eq!(config.analysis.criterion_validity, 7.0);
    }
}
