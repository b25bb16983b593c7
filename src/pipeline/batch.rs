//! Windowed batch scheduling
//!
//! Processes many (task, submission) pairs in fixed windows: items within
//! a window run concurrently, windows run one after another with a fixed
//! pause in between. With four evaluator calls per item this caps peak
//! outbound inference concurrency at `WINDOW_SIZE * 4`.

use crate::inference::CompletionBackend;
use crate::pipeline::aggregator::aggregate;
use crate::pipeline::orchestrator::EvaluationOrchestrator;
use crate::pipeline::types::{SuggestedAction, ValidationResult};
use crate::types::{Submission, Task};
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Items processed concurrently per window
pub const WINDOW_SIZE: usize = 5;

/// Pause between windows
pub const WINDOW_PAUSE: Duration = Duration::from_secs(1);

/// Flag attached to items whose evaluation failed at the transport level
pub const PROCESSING_ERROR_FLAG: &str = "AI_PROCESSING_ERROR";

/// Outcome of one batch item, index-aligned with the input pairs
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// The validation result, or the conservative substitute when the
    /// item's evaluation failed at the transport level
    pub result: ValidationResult,

    /// Whether this item degraded to the substitute
    pub degraded: bool,

    /// Wall-clock time spent on this item
    pub processing_time_ms: u64,
}

impl ValidationResult {
    /// Conservative substitute for an item whose evaluators could not be
    /// reached: zero score, flagged for a human, never auto-approved.
    pub fn processing_error() -> Self {
        Self {
            score: 0,
            should_approve: false,
            confidence: 0.5,
            feedback: "Automated validation was unavailable for this submission.".to_string(),
            flagged_issues: vec![PROCESSING_ERROR_FLAG.to_string()],
            suggested_actions: vec![SuggestedAction::FlagForHumanReview],
        }
    }
}

/// Runs the orchestrate-and-aggregate pipeline over many pairs with
/// bounded concurrency and inter-window pacing
pub struct BatchScheduler<B: CompletionBackend> {
    orchestrator: EvaluationOrchestrator<B>,
}

impl<B: CompletionBackend> BatchScheduler<B> {
    /// Create a scheduler over an injected backend handle
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            orchestrator: EvaluationOrchestrator::new(backend),
        }
    }

    /// Validate every pair, returning one outcome per pair in input order.
    ///
    /// A transport failure on one item degrades that item to the
    /// conservative substitute; sibling items in the same window and all
    /// later windows are unaffected.
    pub async fn run_batch(&self, pairs: &[(Task, Submission)]) -> Vec<BatchOutcome> {
        let mut outcomes = Vec::with_capacity(pairs.len());
        let window_count = pairs.len().div_ceil(WINDOW_SIZE);

        for (index, window) in pairs.chunks(WINDOW_SIZE).enumerate() {
            let window_outcomes = join_all(
                window
                    .iter()
                    .map(|(task, submission)| self.process_item(task, submission)),
            )
            .await;
            outcomes.extend(window_outcomes);

            // Pace the provider between windows; the last window has
            // nothing after it to pace.
            if index + 1 < window_count {
                tokio::time::sleep(WINDOW_PAUSE).await;
            }
        }

        let degraded = outcomes.iter().filter(|o| o.degraded).count();
        info!(
            items = pairs.len(),
            windows = window_count,
            degraded,
            "batch validation complete"
        );

        outcomes
    }

    async fn process_item(&self, task: &Task, submission: &Submission) -> BatchOutcome {
        let start = Instant::now();

        match self.orchestrator.evaluate(task, submission).await {
            Ok(reports) => BatchOutcome {
                result: aggregate(
                    reports.primary.get(),
                    reports.quality.get(),
                    reports.fraud.get(),
                    reports.feedback.get(),
                ),
                degraded: false,
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
            Err(err) => {
                warn!(
                    submission_id = %submission.id,
                    error = %err,
                    "batch item failed, substituting degraded result"
                );
                BatchOutcome {
                    result: ValidationResult::processing_error(),
                    degraded: true,
                    processing_time_ms: start.elapsed().as_millis() as u64,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::aggregator::recommendation_for;
    use crate::pipeline::types::AiRecommendation;

    #[test]
    fn test_processing_error_substitute() {
        let result = ValidationResult::processing_error();
        assert_eq!(result.score, 0);
        assert!(!result.should_approve);
        assert_eq!(result.flagged_issues, vec![PROCESSING_ERROR_FLAG]);
        assert!(result
            .suggested_actions
            .contains(&SuggestedAction::FlagForHumanReview));
    }

    #[test]
    fn test_window_arithmetic() {
        assert_eq!(10_usize.div_ceil(WINDOW_SIZE), 2);
        assert_eq!(11_usize.div_ceil(WINDOW_SIZE), 3);
        assert_eq!(1_usize.div_ceil(WINDOW_SIZE), 1);
    }

    #[test]
    fn test_degraded_recommendation_is_not_derived() {
        // The substitute scores 0, which the presentation mapping would
        // call REJECT; degraded items must surface as REVIEW instead, so
        // the caller keys on the degraded flag, not the mapping.
        let result = ValidationResult::processing_error();
        assert_eq!(recommendation_for(&result), AiRecommendation::Reject);
    }
}
