//! JSON payloads and error rendering shared by the API handlers.

use salvo::{Response, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};

use cadence_rfc::error::RfcError;
use cadence_rfc::rfc::recur::{RecurrenceSpec, ResolvedRecurrence};
use cadence_service::error::ServiceError;
use cadence_service::task::TaskRecord;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Stored task with display-ready preview dates and its iCalendar rule
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    #[serde(flatten)]
    pub task: TaskRecord,
    pub preview_labels: Vec<String>,
    pub rfc5545: String,
}

impl From<TaskRecord> for TaskResponse {
    fn from(task: TaskRecord) -> Self {
        Self {
            preview_labels: task.resolved.preview_labels(),
            rfc5545: task.spec.to_rfc5545(),
            task,
        }
    }
}

/// ## Summary
/// Resolution of a form or rule text that was not stored
#[derive(Debug, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub spec: RecurrenceSpec,
    pub resolved: ResolvedRecurrence,
    pub preview_labels: Vec<String>,
    pub rfc5545: String,
}

impl PreviewResponse {
    #[must_use]
    pub fn new(spec: RecurrenceSpec, resolved: ResolvedRecurrence) -> Self {
        Self {
            preview_labels: resolved.preview_labels(),
            rfc5545: spec.to_rfc5545(),
            spec,
            resolved,
        }
    }
}

/// Renders a JSON error body with the given status.
pub fn render_error(res: &mut Response, status: StatusCode, error: impl Into<String>) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: error.into(),
    }));
}

/// Maps a service error to its HTTP status and renders the reason.
pub fn render_service_error(res: &mut Response, err: &ServiceError) {
    let status = match err {
        ServiceError::ValidationError(_) | ServiceError::RfcError(RfcError::InvalidSpec(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ServiceError::RfcError(RfcError::ParseError(_)) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::InvariantViolation(_) => {
            tracing::error!(error = %err, "Task service invariant violated");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    tracing::debug!(status = %status, error = %err, "Request rejected");
    render_error(res, status, err.to_string());
}
