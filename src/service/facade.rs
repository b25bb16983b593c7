//! ValidationService implementation

use crate::config::ValidatorConfig;
use crate::errors::Result;
use crate::evaluators::{parse_string_array, prompts};
use crate::inference::{CompletionBackend, InferenceClient};
use crate::pipeline::aggregator::{aggregate, recommendation_for};
use crate::pipeline::batch::BatchScheduler;
use crate::pipeline::orchestrator::EvaluationOrchestrator;
use crate::pipeline::types::AiRecommendation;
use crate::service::types::{HealthReport, HealthStatus, SubmissionValidation};
use crate::types::{Submission, Task};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Fallback suggestion list when the model's response is unusable
const SUGGESTIONS_FALLBACK: &str = "Unable to generate suggestions due to parsing error";

/// Estimated decision accuracy reported by the health probe. A fixed
/// calibration figure: this layer has no ground-truth store to measure
/// against.
const ESTIMATED_ACCURACY: f64 = 0.94;

/// Public facade over the validation pipeline
pub struct ValidationService<B: CompletionBackend> {
    backend: Arc<B>,
    orchestrator: EvaluationOrchestrator<B>,
    scheduler: BatchScheduler<B>,
}

impl ValidationService<InferenceClient> {
    /// Build the production service from environment configuration.
    ///
    /// Fails with `NotConfigured` when the inference credential is absent.
    pub fn from_config(config: &ValidatorConfig) -> Result<Self> {
        let client = InferenceClient::from_config(config)?;
        Ok(Self::new(Arc::new(client)))
    }
}

impl<B: CompletionBackend> ValidationService<B> {
    /// Create the service over an injected backend handle
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            orchestrator: EvaluationOrchestrator::new(backend.clone()),
            scheduler: BatchScheduler::new(backend.clone()),
            backend,
        }
    }

    /// Validate one submission synchronously.
    ///
    /// Transport/provider failures are re-raised to the caller for retry
    /// or escalation; parse failures have already degraded to fallbacks
    /// inside the pipeline.
    pub async fn validate_submission(
        &self,
        task: &Task,
        submission: &Submission,
    ) -> Result<SubmissionValidation> {
        let start = Instant::now();
        let reports = self.orchestrator.evaluate(task, submission).await?;
        let result = aggregate(
            reports.primary.get(),
            reports.quality.get(),
            reports.fraud.get(),
            reports.feedback.get(),
        );
        let recommendation = recommendation_for(&result);

        info!(
            submission_id = %submission.id,
            score = result.score,
            recommendation = ?recommendation,
            degraded_outputs = reports.degraded_count(),
            "submission validated"
        );

        Ok(SubmissionValidation {
            submission_id: submission.id.clone(),
            ai_score: result.score,
            ai_recommendation: recommendation,
            ai_feedback: result.feedback,
            ai_flags: result.flagged_issues,
            confidence: result.confidence,
            suggested_actions: result.suggested_actions,
            processing_time_ms: start.elapsed().as_millis() as u64,
            validated_at: Utc::now(),
        })
    }

    /// Validate many pairs, one result per pair in input order.
    ///
    /// Callers pre-filter pairs to `Pending` submissions. A transport
    /// failure on one item degrades that item (zero score, `REVIEW`,
    /// `AI_PROCESSING_ERROR` flag) instead of aborting the batch.
    pub async fn validate_batch(&self, pairs: &[(Task, Submission)]) -> Vec<SubmissionValidation> {
        let outcomes = self.scheduler.run_batch(pairs).await;

        outcomes
            .into_iter()
            .zip(pairs.iter())
            .map(|(outcome, (_, submission))| {
                let recommendation = if outcome.degraded {
                    AiRecommendation::Review
                } else {
                    recommendation_for(&outcome.result)
                };
                SubmissionValidation {
                    submission_id: submission.id.clone(),
                    ai_score: outcome.result.score,
                    ai_recommendation: recommendation,
                    ai_feedback: outcome.result.feedback,
                    ai_flags: outcome.result.flagged_issues,
                    confidence: outcome.result.confidence,
                    suggested_actions: outcome.result.suggested_actions,
                    processing_time_ms: outcome.processing_time_ms,
                    validated_at: Utc::now(),
                }
            })
            .collect()
    }

    /// Ask the primary-review role for task-requirement improvements.
    ///
    /// Transport failures re-raise; an unusable response degrades to the
    /// fixed fallback list.
    pub async fn suggest_task_improvements(&self, task: &Task) -> Result<Vec<String>> {
        let raw = self
            .backend
            .complete(
                prompts::TASK_IMPROVEMENT_INSTRUCTIONS,
                &prompts::render_task_improvements(task),
            )
            .await?;

        let suggestions =
            parse_string_array(&raw, vec![SUGGESTIONS_FALLBACK.to_string()]).into_inner();
        Ok(suggestions)
    }

    /// Probe provider availability. Never hard-fails: any internal error
    /// reads as `Offline`.
    pub async fn health(&self) -> HealthReport {
        let start = Instant::now();
        let reachable = self.backend.is_available().await;

        HealthReport {
            status: if reachable {
                HealthStatus::Online
            } else {
                HealthStatus::Offline
            },
            has_api_key: true,
            model: self.backend.model().to_string(),
            response_time_ms: start.elapsed().as_millis() as u64,
            accuracy: ESTIMATED_ACCURACY,
        }
    }
}

/// Health report for a service that could not be constructed because the
/// credential is missing
pub fn unconfigured_health(config: &ValidatorConfig) -> HealthReport {
    HealthReport {
        status: HealthStatus::Offline,
        has_api_key: config.has_api_key(),
        model: config.model.clone(),
        response_time_ms: 0,
        accuracy: ESTIMATED_ACCURACY,
    }
}
