//! Evaluation orchestrator
//!
//! Fans one submission out to the four evaluators concurrently and joins
//! their parsed outputs. The evaluator set is small and statically known,
//! so this is a fixed-arity parallel join rather than a worker pool.

use crate::errors::Result;
use crate::evaluators::{
    parse_or_fallback, prompts, FeedbackReport, FraudSignal, PrimaryReview, QualityMetrics,
};
use crate::inference::CompletionBackend;
use crate::pipeline::types::EvaluatorReports;
use crate::types::{Submission, Task};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs all four evaluators for one submission
pub struct EvaluationOrchestrator<B: CompletionBackend> {
    backend: Arc<B>,
}

impl<B: CompletionBackend> EvaluationOrchestrator<B> {
    /// Create an orchestrator over an injected backend handle
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Evaluate one submission: run all four evaluators, wait for all.
    ///
    /// Any transport/provider failure fails the whole operation; there is
    /// no partial result. Unparseable content never reaches this layer as
    /// an error; each response degrades to its role fallback in isolation.
    pub async fn evaluate(&self, task: &Task, submission: &Submission) -> Result<EvaluatorReports> {
        let primary_prompt = prompts::render_primary_review(task, submission);
        let quality_prompt = prompts::render_quality_metrics(task, submission);
        let fraud_prompt = prompts::render_fraud_risk(task, submission);
        let feedback_prompt = prompts::render_feedback(task, submission);
        let (primary_raw, quality_raw, fraud_raw, feedback_raw) = tokio::try_join!(
            self.backend.complete(
                prompts::PRIMARY_REVIEW_INSTRUCTIONS,
                &primary_prompt,
            ),
            self.backend.complete(
                prompts::QUALITY_METRICS_INSTRUCTIONS,
                &quality_prompt,
            ),
            self.backend.complete(
                prompts::FRAUD_RISK_INSTRUCTIONS,
                &fraud_prompt,
            ),
            self.backend.complete(
                prompts::FEEDBACK_INSTRUCTIONS,
                &feedback_prompt,
            ),
        )?;

        let reports = EvaluatorReports {
            primary: parse_or_fallback(&primary_raw, PrimaryReview::fallback()),
            quality: parse_or_fallback(&quality_raw, QualityMetrics::fallback()),
            fraud: parse_or_fallback(&fraud_raw, FraudSignal::fallback()),
            feedback: parse_or_fallback(&feedback_raw, FeedbackReport::fallback()),
        };

        let degraded = reports.degraded_count();
        if degraded > 0 {
            warn!(
                submission_id = %submission.id,
                degraded,
                "evaluator outputs degraded to fallback"
            );
        } else {
            debug!(submission_id = %submission.id, "all evaluator outputs parsed");
        }

        Ok(reports)
    }

    /// Shared backend handle
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }
}
