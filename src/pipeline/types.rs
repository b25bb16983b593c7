//! Pipeline result types

use crate::evaluators::{FeedbackReport, FraudSignal, Parsed, PrimaryReview, QualityMetrics};
use serde::{Deserialize, Serialize};

/// The four parsed evaluator outputs for one submission.
///
/// Each output is individually isolated: one evaluator's unusable
/// response degrades only its own slot to the role fallback.
#[derive(Debug, Clone)]
pub struct EvaluatorReports {
    /// Primary review output
    pub primary: Parsed<PrimaryReview>,

    /// Quality metrics output
    pub quality: Parsed<QualityMetrics>,

    /// Fraud/risk output
    pub fraud: Parsed<FraudSignal>,

    /// Feedback output
    pub feedback: Parsed<FeedbackReport>,
}

impl EvaluatorReports {
    /// Number of outputs that degraded to their fallback
    pub fn degraded_count(&self) -> usize {
        [
            self.primary.is_fallback(),
            self.quality.is_fallback(),
            self.fraud.is_fallback(),
            self.feedback.is_fallback(),
        ]
        .iter()
        .filter(|d| **d)
        .count()
    }
}

/// Action tags attached to a validation result. Additive threshold rules,
/// not mutually exclusive: a result may carry both `ApproveSubmission`
/// and `FlagForHumanReview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestedAction {
    RejectSubmission,
    RequestRevision,
    ApproveSubmission,
    FlagForHumanReview,
    HighlightExceptionalWork,
}

/// Presentation-facing three-valued recommendation.
///
/// Strictly more conservative than `should_approve`: every `Approve`
/// also satisfies `should_approve`, but not vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiRecommendation {
    Approve,
    Reject,
    Review,
}

/// The pipeline's single output for one submission. A pure value:
/// immutable once produced, no identity, no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Calibrated score, 0-100
    pub score: u32,

    /// Automated approval decision
    pub should_approve: bool,

    /// Agreement between the independent quality signals, [0.5, 1.0]
    pub confidence: f64,

    /// Human-readable feedback text
    pub feedback: String,

    /// Primary-review issues followed by fraud flags, order preserved,
    /// duplicates kept
    pub flagged_issues: Vec<String>,

    /// Additive action tags
    pub suggested_actions: Vec<SuggestedAction>,
}
