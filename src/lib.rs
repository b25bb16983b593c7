//! Veritask - AI-assisted submission validation for task marketplaces
//!
//! Evaluates contributor submissions against a task's stated requirements
//! and renders an automated accept/reject/manual-review decision, a
//! calibrated quality score, a fraud-risk signal, and human-readable
//! feedback.
//!
//! # Architecture
//!
//! - `inference` - single-call access to the text-inference provider
//! - `evaluators` - four specialized judging roles + defensive parsing
//! - `pipeline` - concurrent fan-out, deterministic aggregation, batching
//! - `service` - the public facade external collaborators call
//! - `server` - HTTP fronting for the facade

pub mod config;
pub mod errors;
pub mod evaluators;
pub mod inference;
pub mod pipeline;
pub mod server;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, ValidationError};
pub use service::ValidationService;
