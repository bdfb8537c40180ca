//! Recurring task records, the task store interface and task orchestration.

pub mod error;
pub mod store;
pub mod task;
