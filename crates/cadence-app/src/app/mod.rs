pub mod api;

use std::sync::Arc;

use salvo::Router;

use crate::config::{ConfigHandler, Settings};
use crate::store_handler::TaskStoreHandler;
use cadence_service::store::TaskStore;

/// ## Summary
/// Builds the root router with configuration and task store injected into
/// every request.
#[must_use]
pub fn build_router(settings: Settings, store: Arc<dyn TaskStore>) -> Router {
    Router::new()
        .hoop(ConfigHandler::new(settings))
        .hoop(TaskStoreHandler { store })
        .push(api::routes())
}
