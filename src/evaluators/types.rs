//! Evaluator output shapes
//!
//! Field names mirror the JSON keys the evaluator instructions demand, so
//! these deserialize directly from well-behaved model output. Every field
//! is required on purpose: a response missing fields is incomplete and
//! must degrade to the role's fallback rather than silently defaulting
//! (a defaulted riskScore of 0 would read as "no risk").

use serde::{Deserialize, Serialize};

/// Fixed issue text used when a primary review could not be parsed
pub const PARSE_FAILURE_ISSUE: &str = "Failed to parse AI response";

/// Primary reviewer verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewRecommendation {
    Approve,
    Reject,
    NeedsRevision,
}

/// Primary review: does the submission meet the task requirements
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryReview {
    /// Overall score, 0-100
    pub score: f64,

    /// Whether the stated requirements are met
    pub meets_requirements: bool,

    /// Completeness score, 0-100
    pub completeness: f64,

    /// Quality score, 0-100
    pub quality: f64,

    /// Problems found, order preserved
    pub key_issues: Vec<String>,

    /// Strengths found
    pub strengths: Vec<String>,

    /// Reviewer verdict
    pub recommendation: ReviewRecommendation,
}

impl PrimaryReview {
    /// Conservative fallback when the response cannot be parsed: mid score,
    /// requirements unmet, revision requested.
    pub fn fallback() -> Self {
        Self {
            score: 50.0,
            meets_requirements: false,
            completeness: 50.0,
            quality: 50.0,
            key_issues: vec![PARSE_FAILURE_ISSUE.to_string()],
            strengths: Vec::new(),
            recommendation: ReviewRecommendation::NeedsRevision,
        }
    }
}

/// Quality metrics across eight dimensions, all 0-100
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub completeness: f64,
    pub accuracy: f64,
    pub presentation: f64,
    pub innovation: f64,
    pub overall_quality: f64,
    pub technical_depth: f64,
    pub documentation: f64,
    pub best_practices: f64,
}

impl QualityMetrics {
    /// Fallback: every dimension at the midpoint
    pub fn fallback() -> Self {
        Self {
            completeness: 50.0,
            accuracy: 50.0,
            presentation: 50.0,
            innovation: 50.0,
            overall_quality: 50.0,
            technical_depth: 50.0,
            documentation: 50.0,
            best_practices: 50.0,
        }
    }
}

/// Fraud/risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudSignal {
    /// Risk score, 0-100 (higher is riskier)
    pub risk_score: f64,

    /// Suspicious patterns found, order preserved
    pub suspicious_flags: Vec<String>,

    /// Assessor's confidence in its own judgment, 0.0-1.0
    pub confidence: f64,

    /// Whether a human should look at this submission
    pub requires_human_review: bool,

    /// Supporting evidence for the flags
    pub evidence_points: Vec<String>,
}

impl FraudSignal {
    /// Fallback: moderate risk, low confidence, human review required.
    /// An unparseable fraud assessment must never read as "all clear".
    pub fn fallback() -> Self {
        Self {
            risk_score: 30.0,
            suspicious_flags: Vec::new(),
            confidence: 0.3,
            requires_human_review: true,
            evidence_points: Vec::new(),
        }
    }
}

/// Contributor-facing feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    /// What the contributor did well
    pub positive_feedback: String,

    /// Areas needing work, order preserved
    pub improvement_areas: Vec<String>,

    /// Concrete suggestions
    pub specific_suggestions: Vec<String>,

    /// Encouraging closing note
    pub encouragement: String,

    /// Recommended next steps
    pub next_steps: Vec<String>,
}

impl FeedbackReport {
    /// Fallback: neutral, generic message
    pub fn fallback() -> Self {
        Self {
            positive_feedback: "Thank you for your submission.".to_string(),
            improvement_areas: Vec::new(),
            specific_suggestions: Vec::new(),
            encouragement: "Your work has been received and will be reviewed.".to_string(),
            next_steps: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_review_deserialize() {
        let json = r#"{
            "score": 85,
            "meetsRequirements": true,
            "completeness": 90,
            "quality": 80,
            "keyIssues": ["minor typo"],
            "strengths": ["thorough"],
            "recommendation": "APPROVE"
        }"#;
        let review: PrimaryReview = serde_json::from_str(json).unwrap();
        assert_eq!(review.score, 85.0);
        assert!(review.meets_requirements);
        assert_eq!(review.recommendation, ReviewRecommendation::Approve);
    }

    #[test]
    fn test_primary_review_missing_field_rejected() {
        // No meetsRequirements: incomplete JSON must not deserialize
        let json = r#"{"score": 85}"#;
        assert!(serde_json::from_str::<PrimaryReview>(json).is_err());
    }

    #[test]
    fn test_recommendation_wire_names() {
        let rec: ReviewRecommendation = serde_json::from_str("\"NEEDS_REVISION\"").unwrap();
        assert_eq!(rec, ReviewRecommendation::NeedsRevision);
        assert_eq!(
            serde_json::to_string(&ReviewRecommendation::Reject).unwrap(),
            "\"REJECT\""
        );
    }

    #[test]
    fn test_primary_fallback_values() {
        let fb = PrimaryReview::fallback();
        assert_eq!(fb.score, 50.0);
        assert!(!fb.meets_requirements);
        assert_eq!(fb.recommendation, ReviewRecommendation::NeedsRevision);
        assert_eq!(fb.key_issues, vec![PARSE_FAILURE_ISSUE.to_string()]);
    }

    #[test]
    fn test_quality_fallback_all_midpoint() {
        let fb = QualityMetrics::fallback();
        for v in [
            fb.completeness,
            fb.accuracy,
            fb.presentation,
            fb.innovation,
            fb.overall_quality,
            fb.technical_depth,
            fb.documentation,
            fb.best_practices,
        ] {
            assert_eq!(v, 50.0);
        }
    }

    #[test]
    fn test_fraud_fallback_is_cautious() {
        let fb = FraudSignal::fallback();
        assert_eq!(fb.risk_score, 30.0);
        assert_eq!(fb.confidence, 0.3);
        assert!(fb.requires_human_review);
    }

    #[test]
    fn test_fraud_deserialize() {
        let json = r#"{
            "riskScore": 10,
            "suspiciousFlags": [],
            "confidence": 0.9,
            "requiresHumanReview": false,
            "evidencePoints": []
        }"#;
        let fraud: FraudSignal = serde_json::from_str(json).unwrap();
        assert_eq!(fraud.risk_score, 10.0);
        assert!(!fraud.requires_human_review);
    }

    #[test]
    fn test_feedback_fallback_is_neutral() {
        let fb = FeedbackReport::fallback();
        assert!(!fb.positive_feedback.is_empty());
        assert!(fb.improvement_areas.is_empty());
    }
}
