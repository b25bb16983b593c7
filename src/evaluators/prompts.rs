//! Evaluator instructions and prompt rendering
//!
//! Each role carries fixed system instructions ending with an explicit
//! bare-JSON demand. That demand is a cooperative contract with the model,
//! not a guarantee; the parser never assumes it held.

use crate::types::{Submission, Task};

/// Primary review instructions
pub const PRIMARY_REVIEW_INSTRUCTIONS: &str = "\
You are a strict but fair reviewer for a task marketplace. Judge whether a \
contributor's submission fulfills the task requirements. Respond with a bare \
JSON object and nothing else - no markdown fences, no surrounding prose. \
The object must have exactly these keys: \
\"score\" (number 0-100), \"meetsRequirements\" (boolean), \
\"completeness\" (number 0-100), \"quality\" (number 0-100), \
\"keyIssues\" (array of strings), \"strengths\" (array of strings), \
\"recommendation\" (one of \"APPROVE\", \"REJECT\", \"NEEDS_REVISION\").";

/// Quality metrics instructions
pub const QUALITY_METRICS_INSTRUCTIONS: &str = "\
You are a quality assessor for a task marketplace. Rate the submission on \
each dimension from 0 to 100. Respond with a bare JSON object and nothing \
else - no markdown fences, no surrounding prose. The object must have \
exactly these keys, all numbers 0-100: \"completeness\", \"accuracy\", \
\"presentation\", \"innovation\", \"overallQuality\", \"technicalDepth\", \
\"documentation\", \"bestPractices\".";

/// Fraud/risk instructions
pub const FRAUD_RISK_INSTRUCTIONS: &str = "\
You are a fraud analyst for a task marketplace. Look for plagiarism, \
low-effort spam, recycled work, fabricated proof, and mismatches between \
the claimed work and the evidence. Respond with a bare JSON object and \
nothing else - no markdown fences, no surrounding prose. The object must \
have exactly these keys: \"riskScore\" (number 0-100, higher is riskier), \
\"suspiciousFlags\" (array of strings), \"confidence\" (number 0.0-1.0), \
\"requiresHumanReview\" (boolean), \"evidencePoints\" (array of strings).";

/// Feedback generation instructions
pub const FEEDBACK_INSTRUCTIONS: &str = "\
You write constructive, encouraging feedback for contributors on a task \
marketplace. Respond with a bare JSON object and nothing else - no markdown \
fences, no surrounding prose. The object must have exactly these keys: \
\"positiveFeedback\" (string), \"improvementAreas\" (array of strings), \
\"specificSuggestions\" (array of strings), \"encouragement\" (string), \
\"nextSteps\" (array of strings).";

/// Task improvement instructions (reuses the primary reviewer role)
pub const TASK_IMPROVEMENT_INSTRUCTIONS: &str = PRIMARY_REVIEW_INSTRUCTIONS;

/// Render the shared task+submission context block used by all four roles
fn render_context(task: &Task, submission: &Submission) -> String {
    format!(
        "TASK\n\
         Title: {title}\n\
         Description: {description}\n\
         Requirements: {requirements}\n\
         Skills: {skills}\n\
         Reward: {reward}\n\
         \n\
         SUBMISSION\n\
         Contributor: {contributor}\n\
         Work URL: {work_url}\n\
         Proof of work: {proof}",
        title = task.title,
        description = task.description,
        requirements = task.requirements,
        skills = task.skills.join(", "),
        reward = task.reward,
        contributor = submission.contributor,
        work_url = submission.work_url,
        proof = submission.proof,
    )
}

/// Prompt for the primary review role
pub fn render_primary_review(task: &Task, submission: &Submission) -> String {
    format!(
        "Review this submission against the task requirements.\n\n{}",
        render_context(task, submission)
    )
}

/// Prompt for the quality metrics role
pub fn render_quality_metrics(task: &Task, submission: &Submission) -> String {
    format!(
        "Rate the quality of this submission on every dimension.\n\n{}",
        render_context(task, submission)
    )
}

/// Prompt for the fraud/risk role
pub fn render_fraud_risk(task: &Task, submission: &Submission) -> String {
    format!(
        "Assess this submission for fraud and risk signals.\n\n{}",
        render_context(task, submission)
    )
}

/// Prompt for the feedback role
pub fn render_feedback(task: &Task, submission: &Submission) -> String {
    format!(
        "Write feedback for the contributor of this submission.\n\n{}",
        render_context(task, submission)
    )
}

/// Prompt asking for task-requirement improvement suggestions
pub fn render_task_improvements(task: &Task) -> String {
    format!(
        "Suggest improvements that would make this task's requirements \
         clearer for contributors. Respond with a bare JSON array of \
         suggestion strings and nothing else.\n\n\
         Title: {title}\n\
         Description: {description}\n\
         Requirements: {requirements}",
        title = task.title,
        description = task.description,
        requirements = task.requirements,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubmissionStatus;
    use chrono::Utc;

    fn fixtures() -> (Task, Submission) {
        let task = Task {
            id: "task-7".to_string(),
            title: "Build landing page".to_string(),
            description: "Responsive landing page".to_string(),
            requirements: "Mobile-first, under 1s load".to_string(),
            skills: vec!["html".to_string(), "css".to_string()],
            reward: 250.0,
            deadline: Utc::now(),
            max_submissions: 1,
        };
        let submission = Submission {
            id: "sub-9".to_string(),
            task_id: "task-7".to_string(),
            contributor: "0xabc".to_string(),
            work_url: "https://example.com/work".to_string(),
            proof: "Deployed at the URL above".to_string(),
            submitted_at: Utc::now(),
            status: SubmissionStatus::Pending,
        };
        (task, submission)
    }

    #[test]
    fn test_all_instructions_demand_bare_json() {
        for instructions in [
            PRIMARY_REVIEW_INSTRUCTIONS,
            QUALITY_METRICS_INSTRUCTIONS,
            FRAUD_RISK_INSTRUCTIONS,
            FEEDBACK_INSTRUCTIONS,
        ] {
            assert!(instructions.contains("bare JSON object"));
            assert!(instructions.contains("no markdown fences"));
        }
    }

    #[test]
    fn test_prompts_carry_task_and_submission() {
        let (task, submission) = fixtures();
        for prompt in [
            render_primary_review(&task, &submission),
            render_quality_metrics(&task, &submission),
            render_fraud_risk(&task, &submission),
            render_feedback(&task, &submission),
        ] {
            assert!(prompt.contains("Build landing page"));
            assert!(prompt.contains("Mobile-first, under 1s load"));
            assert!(prompt.contains("https://example.com/work"));
        }
    }

    #[test]
    fn test_skills_joined_in_context() {
        let (task, submission) = fixtures();
        let prompt = render_primary_review(&task, &submission);
        assert!(prompt.contains("html, css"));
    }

    #[test]
    fn test_improvement_prompt_asks_for_array() {
        let (task, _) = fixtures();
        let prompt = render_task_improvements(&task);
        assert!(prompt.contains("JSON array"));
        assert!(prompt.contains("Build landing page"));
    }
}
