//! Stateless recurrence resolution: previews for unsaved forms and rule text.

use salvo::{Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};

use cadence_service::task::{TaskForm, service};

use super::RECURRENCE_ROUTE_COMPONENT;
use super::response::{PreviewResponse, render_error, render_service_error};


/// Body of a rule text resolution request.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuleTextRequest {
    pub rule: String,
}

/// ## Summary
/// POST /api/recurrence/preview - Resolve a form without storing it
///
/// ## Errors
/// Returns HTTP 400 if the body is not a task form
/// Returns HTTP 422 if required fields are missing or the recurrence is invalid
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn preview(req: &mut Request, res: &mut Response) {
    let form = match req.parse_json::<TaskForm>().await {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse preview form");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    match service::preview(form) {
        Ok((submission, resolved)) => {
            res.render(Json(PreviewResponse::new(submission.spec, resolved)));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /api/recurrence/parse - Resolve canonical rule text
///
/// ## Errors
/// Returns HTTP 400 for a malformed body or rule text
/// Returns HTTP 422 if the parsed recurrence is invalid
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn parse(req: &mut Request, res: &mut Response) {
    let body = match req.parse_json::<RuleTextRequest>().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse rule text request");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            return;
        }
    };

    match service::resolve_rule_text(&body.rule) {
        Ok((spec, resolved)) => res.render(Json(PreviewResponse::new(spec, resolved))),
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(RECURRENCE_ROUTE_COMPONENT)
        .push(Router::with_path("preview").post(preview))
        .push(Router::with_path("parse").post(parse))
}
