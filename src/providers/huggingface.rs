//! Hosted inference-API tier.
//!
//! The inference endpoint returns free text rather than guaranteed JSON, so
//! this tier only succeeds when the generated text parses into a JSON
//! object; anything else falls through to the next tier.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

use super::{AnalysisRequest, ProviderTier, parse_json_object};
use crate::config::ProviderSettings;
use crate::error::{Result, SessionScopeError};

#[derive(Clone, Debug)]
pub struct HuggingFaceTier {
    api_key: String,
    model_url: String,
    client: Client,
}

impl HuggingFaceTier {
    pub fn new(settings: &ProviderSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            api_key: settings.huggingface_api_key.clone().unwrap_or_default(),
            model_url: settings.huggingface_model_url.clone(),
            client,
        }
    }
}

#[async_trait]
impl ProviderTier for HuggingFaceTier {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    async fn attempt(&self, request: &AnalysisRequest) -> Result<Option<Value>> {
        let payload = json!({
            "inputs": format!("Context: {}\n\nTask: {}", request.context, request.prompt),
            "parameters": {
                "max_length": 1000,
                "temperature": 0.7,
                "return_full_text": false
            }
        });

        let resp = self
            .client
            .post(&self.model_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SessionScopeError::Provider {
                message: format!("inference API returned {}", status),
            });
        }

        let value: Value = resp.json().await.map_err(|e| SessionScopeError::Provider {
            message: format!("unparseable inference response: {}", e),
        })?;

        // Responses arrive as [{"generated_text": "..."}] or a bare object.
        let generated = value
            .get(0)
            .and_then(|v| v.get("generated_text"))
            .or_else(|| value.get("generated_text"))
            .and_then(|v| v.as_str())
            .unwrap_or("");

        Ok(parse_json_object(generated))
    }
}
