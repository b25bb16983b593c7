//! Inference API client
//!
//! Low-level HTTP client for an OpenAI-compatible chat completions
//! endpoint. One request per evaluator call, bearer-token auth, bounded
//! timeout. The client does not interpret response content; that is the
//! evaluator layer's job.

use crate::config::ValidatorConfig;
use crate::errors::{Result, ValidationError};
use crate::inference::types::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Sampling temperature for judging calls. Low on purpose: evaluator
/// output feeds a deterministic aggregation, not creative text.
const JUDGE_TEMPERATURE: f64 = 0.2;

/// Upper bound on completion length per evaluator call
const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Timeout for the health probe
const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);

/// A single-call text-inference backend.
///
/// `complete` issues one request with fixed role instructions and a
/// rendered prompt, returning the raw response text. Transport, auth and
/// timeout failures surface as errors; content is never inspected here.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issue one inference request and return the raw response text
    async fn complete(&self, instructions: &str, prompt: &str) -> Result<String>;

    /// Whether the provider is currently reachable
    async fn is_available(&self) -> bool;

    /// Model identifier this backend is configured for
    fn model(&self) -> &str;
}

/// HTTP client for the inference provider
#[derive(Debug, Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_ms: u64,
}

impl InferenceClient {
    /// Build a client from service configuration.
    ///
    /// Fails with `NotConfigured` when the credential is absent, so a
    /// missing key is caught at startup instead of on the first request.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ValidationError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            timeout_ms: config.timeout_secs * 1000,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CompletionBackend for InferenceClient {
    async fn complete(&self, instructions: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(instructions),
                ChatMessage::user(prompt),
            ],
            temperature: JUDGE_TEMPERATURE,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ValidationError::Timeout {
                        duration_ms: self.timeout_ms,
                    }
                } else {
                    ValidationError::InferenceApi(format!("Failed to send request: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ValidationError::InferenceApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| ValidationError::InferenceApi(format!("Malformed response: {}", e)))?;

        Ok(completion.first_text().to_string())
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/models", self.base_url);
        self.client
            .get(&url)
            .bearer_auth(&self.api_key)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
