//! Score aggregation
//!
//! Pure functions combining the four evaluator outputs into one calibrated
//! decision. No I/O, no clock, no randomness: a fixed input quadruple
//! always produces the same result.

use crate::evaluators::{FeedbackReport, FraudSignal, PrimaryReview, QualityMetrics};
use crate::pipeline::types::{AiRecommendation, SuggestedAction, ValidationResult};

/// Weight of the primary review score
const PRIMARY_WEIGHT: f64 = 0.4;

/// Weight of the overall quality score
const QUALITY_WEIGHT: f64 = 0.3;

/// Weight of the inverted fraud risk score
const SAFETY_WEIGHT: f64 = 0.3;

/// Score at or above which a submission is approvable
const APPROVE_THRESHOLD: u32 = 75;

/// Score below which revision is not worth requesting
const REJECT_THRESHOLD: u32 = 60;

/// Risk score at or above which approval is blocked
const RISK_CEILING: f64 = 30.0;

/// Combine the four evaluator outputs into one `ValidationResult`.
///
/// Out-of-range model numbers are clamped to [0, 100] before weighting,
/// so the final score always lands in [0, 100]. Rounding is half away
/// from zero.
pub fn aggregate(
    primary: &PrimaryReview,
    quality: &QualityMetrics,
    fraud: &FraudSignal,
    feedback: &FeedbackReport,
) -> ValidationResult {
    let primary_score = primary.score.clamp(0.0, 100.0);
    let quality_score = quality.overall_quality.clamp(0.0, 100.0);
    let risk_score = fraud.risk_score.clamp(0.0, 100.0);

    let weighted = primary_score * PRIMARY_WEIGHT
        + quality_score * QUALITY_WEIGHT
        + (100.0 - risk_score) * SAFETY_WEIGHT;
    let score = weighted.round() as u32;

    let should_approve =
        score >= APPROVE_THRESHOLD && fraud.risk_score < RISK_CEILING && primary.meets_requirements;

    // Disagreement between the two independent quality signals reduces
    // confidence; a single aggregator is still a stronger signal than
    // none, hence the 0.5 floor.
    let confidence = (1.0 - (primary_score - quality_score).abs() / 100.0).max(0.5);

    let mut flagged_issues = primary.key_issues.clone();
    flagged_issues.extend(fraud.suspicious_flags.iter().cloned());

    let feedback_text = format!(
        "{}\n\nAreas for improvement: {}",
        feedback.positive_feedback,
        feedback.improvement_areas.join(", ")
    );

    let mut suggested_actions = Vec::new();
    if score < REJECT_THRESHOLD {
        suggested_actions.push(SuggestedAction::RejectSubmission);
    }
    if (REJECT_THRESHOLD..APPROVE_THRESHOLD).contains(&score) {
        suggested_actions.push(SuggestedAction::RequestRevision);
    }
    if score >= APPROVE_THRESHOLD {
        suggested_actions.push(SuggestedAction::ApproveSubmission);
    }
    if fraud.requires_human_review {
        suggested_actions.push(SuggestedAction::FlagForHumanReview);
    }
    if quality.innovation > 90.0 {
        suggested_actions.push(SuggestedAction::HighlightExceptionalWork);
    }

    ValidationResult {
        score,
        should_approve,
        confidence,
        feedback: feedback_text,
        flagged_issues,
        suggested_actions,
    }
}

/// Derive the presentation-facing recommendation from a result.
///
/// `Approve` only when the automated decision approved with high
/// confidence; `Reject` only when the score is very low or the issue list
/// is long; everything else goes to a human.
pub fn recommendation_for(result: &ValidationResult) -> AiRecommendation {
    if result.should_approve && result.confidence > 0.8 {
        AiRecommendation::Approve
    } else if result.score < 40 || result.flagged_issues.len() > 2 {
        AiRecommendation::Reject
    } else {
        AiRecommendation::Review
    }
}
