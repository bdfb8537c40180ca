mod app_specific;
mod recurrence;
mod response;
mod tasks;

use salvo::Router;

// Re-export route constants from core
pub use cadence_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
    RECURRENCE_ROUTE_COMPONENT, RECURRENCE_ROUTE_PREFIX, TASKS_ROUTE_COMPONENT,
    TASKS_ROUTE_PREFIX,
};
pub use response::{ErrorResponse, PreviewResponse, TaskResponse};

/// ## Summary
/// Constructs the API router with the task and recurrence handlers.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(tasks::routes())
        .push(recurrence::routes())
}
