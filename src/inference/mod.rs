//! Inference provider access
//!
//! One narrowly-scoped completion call per evaluator. The backend is a
//! trait so the orchestrator can be driven by a scripted double in tests.

pub mod client;
pub mod types;

pub use client::{CompletionBackend, InferenceClient};
