//! Marketplace domain types
//!
//! `Task` and `Submission` are created and owned by the external
//! task-management collaborator. The pipeline only reads them and
//! recommends a status transition; it never applies one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable description of work to be done
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier
    pub id: String,

    /// Short title
    pub title: String,

    /// Full description of the work
    pub description: String,

    /// Requirements text evaluated against submissions
    pub requirements: String,

    /// Free-form skill tags, order preserved
    #[serde(default)]
    pub skills: Vec<String>,

    /// Reward for an accepted submission
    pub reward: f64,

    /// Submission deadline
    pub deadline: DateTime<Utc>,

    /// Maximum number of accepted submissions
    pub max_submissions: u32,
}

/// One contributor's attempt at a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Submission identifier
    pub id: String,

    /// Owning task identifier
    pub task_id: String,

    /// Contributor identity
    pub contributor: String,

    /// Locator for the submitted work (URI)
    pub work_url: String,

    /// Free-text proof/description of the work done
    pub proof: String,

    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,

    /// Lifecycle status, owned by the external collaborator
    pub status: SubmissionStatus,
}

/// Submission lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Awaiting review
    Pending,

    /// Accepted
    Approved,

    /// Not accepted
    Rejected,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "Pending"),
            SubmissionStatus::Approved => write!(f, "Approved"),
            SubmissionStatus::Rejected => write!(f, "Rejected"),
        }
    }
}
