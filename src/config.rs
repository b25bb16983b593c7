//! Service configuration
//!
//! Read once from the process environment at startup. The inference
//! credential is the only required value; everything else has a default.
//! No configuration file exists at this layer.

use crate::errors::{Result, ValidationError};

/// Default inference API base URL (OpenAI-compatible)
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default judging model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the inference credential
pub const API_KEY_ENV: &str = "VERITASK_API_KEY";

/// Validator service configuration
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Inference API credential. `None` means the service is reachable but
    /// unconfigured; requests must not be attempted.
    pub api_key: Option<String>,

    /// Inference API base URL
    pub base_url: String,

    /// Model used for all evaluator roles
    pub model: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ValidatorConfig {
    /// Load configuration from the process environment.
    ///
    /// A missing credential is not an error here; the facade reports it as
    /// a distinct "service unconfigured" condition on first use.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());

        let base_url = std::env::var("VERITASK_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("VERITASK_MODEL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_secs = std::env::var("VERITASK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        }
    }

    /// Whether the inference credential is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Return the credential or the unconfigured error
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            ValidationError::NotConfigured(format!("{} is not set", API_KEY_ENV))
        })
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
