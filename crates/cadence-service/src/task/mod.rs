//! Recurring tasks: form model, records and service operations.

mod form;
mod record;
pub mod service;


pub use form::{DEFAULT_OCCURRENCE_COUNT, EndType, TaskForm, TaskSubmission};
pub use record::TaskRecord;
