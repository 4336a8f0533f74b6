use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use super::base::{Provider, Usage};
use super::configs::GeminiProviderConfig;
use super::utils::{check_gemini_error, gemini_response_to_text, gemini_usage, prompt_to_gemini_spec};
use crate::errors::{ProviderError, ProviderResult};

// Kept out of the URL, which reqwest includes in its error messages.
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiProvider {
    client: Client,
    config: GeminiProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiProviderConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> ProviderResult<Value> {
        let url = self.config.url();
        tracing::debug!(%url, "sending generateContent request");

        let mut request = self.client.post(&url).json(&payload);
        if !self.config.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, &self.config.api_key);
        }
        let response = request.send().await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {}", e)))
            }
            status if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500 => {
                Err(ProviderError::Server(status))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(ProviderError::RequestFailed { status, body })
            }
        }
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> ProviderResult<(String, Usage)> {
        let payload = prompt_to_gemini_spec(prompt);
        let response = self.post(payload).await?;

        if let Some(error) = check_gemini_error(&response) {
            return Err(error);
        }

        let text = gemini_response_to_text(&response)?;
        let usage = gemini_usage(&response);
        tracing::debug!(?usage, "received generateContent response");

        Ok((text, usage))
    }
}
