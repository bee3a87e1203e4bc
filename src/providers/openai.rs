//! Hosted structured-JSON completion tier.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;

use super::{AnalysisRequest, ProviderTier, parse_json_object};
use crate::config::ProviderSettings;
use crate::error::{Result, SessionScopeError};

#[derive(Clone, Debug)]
pub struct OpenAiTier {
    api_key: String,
    base_url: String,
    model: String,
    client: Client,
}

impl OpenAiTier {
    pub fn new(settings: &ProviderSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            api_key: settings.openai_api_key.clone().unwrap_or_default(),
            base_url: settings.openai_base_url.trim_end_matches('/').to_string(),
            model: settings.openai_model.clone(),
            client,
        }
    }

    async fn chat(&self, body: Value) -> Result<Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(SessionScopeError::Provider {
                message: format!("chat completion returned {}: {}", status, body_text),
            });
        }

        resp.json::<Value>().await.map_err(|e| SessionScopeError::Provider {
            message: format!("unparseable chat completion body: {}", e),
        })
    }

    /// Plain-text completion used for follow-up question answering
    pub async fn complete_text(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ],
            "max_tokens": max_tokens
        });
        let value = self.chat(body).await?;
        let content = value["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();
        if content.is_empty() {
            return Err(SessionScopeError::Provider {
                message: "chat completion contained no content".to_string(),
            });
        }
        Ok(content)
    }
}

#[async_trait]
impl ProviderTier for OpenAiTier {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn attempt(&self, request: &AnalysisRequest) -> Result<Option<Value>> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": format!("You are an expert in {}.", request.context)},
                {"role": "user", "content": request.prompt}
            ],
            "response_format": {"type": "json_object"}
        });
        let value = self.chat(body).await?;
        let content = value["choices"][0]["message"]["content"].as_str().unwrap_or("");
        Ok(parse_json_object(content))
    }
}
