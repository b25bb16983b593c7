//! Error types for the veritask validation service
//!
//! Only infrastructure failures live here: transport, provider, timeout and
//! configuration problems that must surface to the caller. Malformed model
//! output is not an error at all; it is absorbed into conservative
//! fallbacks by the response parser and never reaches this type.

use thiserror::Error;

/// Main error type for the validation pipeline
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Inference provider rejected or failed the request
    #[error("Inference API error: {0}")]
    InferenceApi(String),

    /// Provider request exceeded its deadline
    #[error("Inference request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Inference credential missing from the environment
    #[error("Validation service is not configured: {0}")]
    NotConfigured(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Validation error: {0}")]
    Generic(String),
}

impl ValidationError {
    /// Whether this error denotes a missing credential rather than a
    /// transient request failure. The facade maps this to a distinct
    /// "service unconfigured" response.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, ValidationError::NotConfigured(_))
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Convert anyhow errors to ValidationError
impl From<anyhow::Error> for ValidationError {
    fn from(err: anyhow::Error) -> Self {
        ValidationError::Generic(err.to_string())
    }
}
