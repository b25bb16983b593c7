//! Type definitions module
//!
//! Marketplace domain values consumed by the validation pipeline.

pub mod marketplace;

// Re-export commonly used types
pub use marketplace::{Submission, SubmissionStatus, Task};
