//! Externally-visible result shapes
//!
//! Serialized camelCase for the request/response boundary.

use crate::pipeline::types::{AiRecommendation, SuggestedAction};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One submission's validation as reported to external collaborators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionValidation {
    /// Identifier of the validated submission
    pub submission_id: String,

    /// Calibrated score, 0-100
    pub ai_score: u32,

    /// Three-valued recommendation for the collaborator to apply
    pub ai_recommendation: AiRecommendation,

    /// Human-readable feedback text
    pub ai_feedback: String,

    /// Flagged issues and processing flags
    pub ai_flags: Vec<String>,

    /// Agreement between independent quality signals, [0.5, 1.0]
    pub confidence: f64,

    /// Additive action tags
    pub suggested_actions: Vec<SuggestedAction>,

    /// Wall-clock processing time in milliseconds
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,

    /// When validation finished
    pub validated_at: DateTime<Utc>,
}

impl SubmissionValidation {
    /// Degraded entry for a submission that could not be evaluated:
    /// mirrors the batch scheduler's conservative substitute.
    pub fn processing_error(submission_id: String) -> Self {
        let result = crate::pipeline::types::ValidationResult::processing_error();
        Self {
            submission_id,
            ai_score: result.score,
            ai_recommendation: AiRecommendation::Review,
            ai_feedback: result.feedback,
            ai_flags: result.flagged_issues,
            confidence: result.confidence,
            suggested_actions: result.suggested_actions,
            processing_time_ms: 0,
            validated_at: Utc::now(),
        }
    }
}

/// Service availability as seen by the health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Online,
    Offline,
}

/// Health probe report. Never the product of a hard failure: any internal
/// error collapses to `Offline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// Provider reachability
    pub status: HealthStatus,

    /// Whether the inference credential is configured
    pub has_api_key: bool,

    /// Configured judging model
    pub model: String,

    /// Probe round-trip in milliseconds
    #[serde(rename = "responseTime")]
    pub response_time_ms: u64,

    /// Estimated decision accuracy of the calibrated pipeline
    pub accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_wire_shape() {
        let validation = SubmissionValidation {
            submission_id: "sub-1".to_string(),
            ai_score: 89,
            ai_recommendation: AiRecommendation::Approve,
            ai_feedback: "Good".to_string(),
            ai_flags: Vec::new(),
            confidence: 0.95,
            suggested_actions: vec![SuggestedAction::ApproveSubmission],
            processing_time_ms: 1200,
            validated_at: Utc::now(),
        };
        let json = serde_json::to_string(&validation).unwrap();
        assert!(json.contains("\"aiScore\":89"));
        assert!(json.contains("\"aiRecommendation\":\"APPROVE\""));
        assert!(json.contains("\"processingTime\":1200"));
        assert!(json.contains("validatedAt"));
    }

    #[test]
    fn test_health_wire_shape() {
        let report = HealthReport {
            status: HealthStatus::Online,
            has_api_key: true,
            model: "gpt-4o-mini".to_string(),
            response_time_ms: 40,
            accuracy: 0.94,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"online\""));
        assert!(json.contains("\"hasApiKey\":true"));
        assert!(json.contains("\"responseTime\":40"));
    }
}
