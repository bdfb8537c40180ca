//! Task CRUD endpoints.

use std::sync::Arc;

use salvo::http::header::{HeaderValue, LOCATION};
use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use uuid::Uuid;

use cadence_service::store::TaskStore;
use cadence_service::task::{TaskForm, service};

use super::response::{TaskResponse, render_error, render_service_error};
use super::{TASKS_ROUTE_COMPONENT, TASKS_ROUTE_PREFIX};
use crate::config::get_config_from_depot;
use crate::store_handler::get_store_from_depot;


fn store_or_render(depot: &Depot, res: &mut Response) -> Option<Arc<dyn TaskStore>> {
    match get_store_from_depot(depot) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::error!(error = ?e, "Failed to get task store");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            None
        }
    }
}

fn task_id_or_render(req: &Request, res: &mut Response) -> Option<Uuid> {
    let raw = req.param::<String>("id").unwrap_or_default();
    match Uuid::parse_str(&raw) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!(id = %raw, error = %e, "Invalid task id");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid task id");
            None
        }
    }
}

async fn form_or_render(req: &mut Request, res: &mut Response) -> Option<TaskForm> {
    match req.parse_json::<TaskForm>().await {
        Ok(form) => Some(form),
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse task form");
            render_error(res, StatusCode::BAD_REQUEST, "Invalid request body");
            None
        }
    }
}

/// ## Summary
/// GET /api/tasks - List tasks in creation order
#[handler]
#[tracing::instrument(skip_all)]
async fn list_tasks(depot: &mut Depot, res: &mut Response) {
    let Some(store) = store_or_render(depot, res) else {
        return;
    };

    match service::list_tasks(store.as_ref()) {
        Ok(tasks) => {
            let body: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
            res.render(Json(body));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// POST /api/tasks - Create a task from a submitted form
///
/// ## Errors
/// Returns HTTP 400 if the body is not a task form
/// Returns HTTP 422 if required fields are missing or the recurrence is invalid
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn create_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing create task request");

    let Some(store) = store_or_render(depot, res) else {
        return;
    };
    let Some(form) = form_or_render(req, res).await else {
        return;
    };

    match service::create_task(store.as_ref(), form) {
        Ok(task) => {
            if let Ok(settings) = get_config_from_depot(depot)
                && let Ok(location) = HeaderValue::from_str(&format!(
                    "{}{TASKS_ROUTE_PREFIX}/{}",
                    settings.server.origin(),
                    task.id
                ))
            {
                res.headers_mut().insert(LOCATION, location);
            }

            res.status_code(StatusCode::CREATED);
            res.render(Json(TaskResponse::from(task)));
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/tasks/{id} - Fetch one task
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn get_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(store) = store_or_render(depot, res) else {
        return;
    };
    let Some(id) = task_id_or_render(req, res) else {
        return;
    };

    match service::get_task(store.as_ref(), id) {
        Ok(task) => res.render(Json(TaskResponse::from(task))),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// PUT /api/tasks/{id} - Re-submit a task form, recomputing its recurrence
///
/// ## Errors
/// Returns HTTP 404 for an unknown task; otherwise as for creation
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn update_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(store) = store_or_render(depot, res) else {
        return;
    };
    let Some(id) = task_id_or_render(req, res) else {
        return;
    };
    let Some(form) = form_or_render(req, res).await else {
        return;
    };

    match service::update_task(store.as_ref(), id, form) {
        Ok(task) => res.render(Json(TaskResponse::from(task))),
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// DELETE /api/tasks/{id} - Remove a task
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn delete_task(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(store) = store_or_render(depot, res) else {
        return;
    };
    let Some(id) = task_id_or_render(req, res) else {
        return;
    };

    match service::delete_task(store.as_ref(), id) {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(e) => render_service_error(res, &e),
    }
}

/// ## Summary
/// GET /api/tasks/{id}/form - Form prefilled from a stored task, for editing
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn edit_form(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(store) = store_or_render(depot, res) else {
        return;
    };
    let Some(id) = task_id_or_render(req, res) else {
        return;
    };

    match service::edit_form(store.as_ref(), id) {
        Ok(form) => res.render(Json(form)),
        Err(e) => render_service_error(res, &e),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(TASKS_ROUTE_COMPONENT)
        .get(list_tasks)
        .post(create_task)
        .push(
            Router::with_path("{id}")
                .get(get_task)
                .put(update_task)
                .delete(delete_task)
                .push(Router::with_path("form").get(edit_form)),
        )
}
