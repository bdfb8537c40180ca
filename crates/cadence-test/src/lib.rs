//! Cadence recurring task server - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `cadence_test::` paths.

pub mod component {
    pub use cadence_core::{config, constants, error as core_error};
    pub use cadence_rfc::rfc::recur;
    pub use cadence_service::{store, task};
}

pub mod app {
    pub use cadence_app::app::api::{ErrorResponse, PreviewResponse, TaskResponse};
    pub use cadence_app::app::build_router;
}
