//! Evaluator roles and response handling
//!
//! Four narrowly-specialized evaluators judge one submission: primary
//! review, quality metrics, fraud/risk, and feedback generation. Each is
//! one inference call whose free-text response is defensively parsed into
//! a structured shape, with a fixed conservative fallback when the model
//! did not honor the bare-JSON contract.

pub mod parser;
pub mod prompts;
pub mod types;

pub use parser::{parse_or_fallback, parse_string_array, Parsed};
pub use types::{FeedbackReport, FraudSignal, PrimaryReview, QualityMetrics, ReviewRecommendation};
