//! HTTP fronting for the validation service
//!
//! A thin axum layer over the facade. Status mapping: 400 for missing
//! required fields, 503 when the inference credential is unconfigured,
//! 500 for transport/provider failures. The health probe never
//! hard-fails.

use crate::config::ValidatorConfig;
use crate::errors::ValidationError;
use crate::inference::InferenceClient;
use crate::service::facade::unconfigured_health;
use crate::service::{HealthReport, SubmissionValidation, ValidationService};
use crate::types::{Submission, SubmissionStatus, Task};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// `None` when the inference credential is unconfigured
    service: Option<Arc<ValidationService<InferenceClient>>>,
    config: ValidatorConfig,
}

impl AppState {
    /// Build state from configuration; an absent credential leaves the
    /// service unconstructed so requests answer 503 instead of failing.
    pub fn from_config(config: ValidatorConfig) -> Self {
        let service = ValidationService::from_config(&config)
            .ok()
            .map(Arc::new);
        Self { service, config }
    }

    fn require_service(&self) -> Result<&Arc<ValidationService<InferenceClient>>, ApiError> {
        self.service.as_ref().ok_or_else(ApiError::unconfigured)
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/v1/submissions/validate", post(validate_submission))
        .route("/v1/submissions/validate-batch", post(validate_batch))
        .route("/v1/tasks/suggestions", post(task_suggestions))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateRequest {
    task: Option<Task>,
    submission: Option<Submission>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchValidateRequest {
    #[allow(dead_code)]
    dao_id: Option<String>,
    tasks: Option<Vec<Task>>,
    submissions: Option<Vec<Submission>>,
}

#[derive(Debug, Serialize)]
struct BatchValidateResponse {
    results: Vec<SubmissionValidation>,
}

#[derive(Debug, Deserialize)]
struct SuggestionsRequest {
    task: Option<Task>,
}

#[derive(Debug, Serialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}

async fn validate_submission(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<SubmissionValidation>, ApiError> {
    let task = req.task.ok_or_else(|| ApiError::bad_request("task is required"))?;
    let submission = req
        .submission
        .ok_or_else(|| ApiError::bad_request("submission is required"))?;

    let service = state.require_service()?;
    let validation = service.validate_submission(&task, &submission).await?;
    Ok(Json(validation))
}

async fn validate_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchValidateRequest>,
) -> Result<Json<BatchValidateResponse>, ApiError> {
    let tasks = req.tasks.ok_or_else(|| ApiError::bad_request("tasks are required"))?;
    let submissions = req
        .submissions
        .ok_or_else(|| ApiError::bad_request("submissions are required"))?;

    let service = state.require_service()?;

    // Only pending submissions are validated. A submission whose task is
    // absent from the request cannot be evaluated and degrades the same
    // way a transport failure would.
    let pending: Vec<&Submission> = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Pending)
        .collect();

    let mut pairs = Vec::new();
    let mut matched = Vec::with_capacity(pending.len());
    for submission in &pending {
        match tasks.iter().find(|t| t.id == submission.task_id) {
            Some(task) => {
                pairs.push((task.clone(), (*submission).clone()));
                matched.push(true);
            }
            None => matched.push(false),
        }
    }

    let mut validated = service.validate_batch(&pairs).await.into_iter();
    let results = pending
        .iter()
        .zip(matched)
        .filter_map(|(submission, has_task)| {
            if has_task {
                validated.next()
            } else {
                Some(SubmissionValidation::processing_error(
                    submission.id.clone(),
                ))
            }
        })
        .collect();

    Ok(Json(BatchValidateResponse { results }))
}

async fn task_suggestions(
    State(state): State<AppState>,
    Json(req): Json<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let task = req.task.ok_or_else(|| ApiError::bad_request("task is required"))?;

    let service = state.require_service()?;
    let suggestions = service.suggest_task_improvements(&task).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    match &state.service {
        Some(service) => Json(service.health().await),
        None => Json(unconfigured_health(&state.config)),
    }
}

/// HTTP error carrying the response status for the failure class
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    fn unconfigured() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "validation service is not configured".to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let status = if err.is_not_configured() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
