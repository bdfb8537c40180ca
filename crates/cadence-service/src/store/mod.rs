//! Task store interface.
//!
//! The HTTP layer receives a store through the depot instead of reaching for
//! global state, so any implementation of `TaskStore` can back the API.

mod memory;

pub use memory::InMemoryTaskStore;
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::task::TaskRecord;

/// Mutable collection of task records.
pub trait TaskStore: Send + Sync {
    /// ## Summary
    /// Appends a new record.
    ///
    /// ## Errors
    /// Returns `Conflict` if a record with the same id already exists.
    fn create(&self, record: TaskRecord) -> ServiceResult<TaskRecord>;

    /// ## Summary
    /// Replaces the record with the same id, keeping its list position.
    ///
    /// ## Errors
    /// Returns `NotFound` if no record has the id.
    fn update(&self, record: TaskRecord) -> ServiceResult<TaskRecord>;

    /// ## Summary
    /// Removes the record with `id`.
    ///
    /// ## Errors
    /// Returns `NotFound` if no record has the id.
    fn delete(&self, id: Uuid) -> ServiceResult<()>;

    /// ## Summary
    /// Fetches a record by id.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    fn get(&self, id: Uuid) -> ServiceResult<Option<TaskRecord>>;

    /// ## Summary
    /// Lists all records in insertion order.
    ///
    /// ## Errors
    /// Returns an error if the store cannot be read.
    fn list(&self) -> ServiceResult<Vec<TaskRecord>>;
}
