use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use cadence_core::error::CoreError;
use cadence_service::store::TaskStore;

pub struct TaskStoreHandler {
    pub store: Arc<dyn TaskStore>,
}

#[async_trait]
impl salvo::Handler for TaskStoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Every request shares the same store
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the task store from the depot.
///
/// ## Errors
/// Returns an error if the task store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn TaskStore>> {
    depot
        .obtain::<Arc<dyn TaskStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Task store not found in depot").into())
}
