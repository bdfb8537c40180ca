//! In-memory task store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::TaskStore;
use crate::error::{ServiceError, ServiceResult};
use crate::task::TaskRecord;

/// Task store holding records in insertion order for the life of the process.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<TaskRecord>>,
}

impl InMemoryTaskStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, Vec<TaskRecord>>> {
        self.tasks
            .read()
            .map_err(|_poisoned| ServiceError::InvariantViolation("task store lock poisoned"))
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, Vec<TaskRecord>>> {
        self.tasks
            .write()
            .map_err(|_poisoned| ServiceError::InvariantViolation("task store lock poisoned"))
    }
}

impl TaskStore for InMemoryTaskStore {
    #[tracing::instrument(skip(self, record), fields(task_id = %record.id))]
    fn create(&self, record: TaskRecord) -> ServiceResult<TaskRecord> {
        let mut tasks = self.write()?;
        if tasks.iter().any(|task| task.id == record.id) {
            tracing::warn!("Task id already present");
            return Err(ServiceError::Conflict(format!("task {} already exists", record.id)));
        }

        tasks.push(record.clone());
        tracing::trace!(total = tasks.len(), "Task stored");
        Ok(record)
    }

    #[tracing::instrument(skip(self, record), fields(task_id = %record.id))]
    fn update(&self, record: TaskRecord) -> ServiceResult<TaskRecord> {
        let mut tasks = self.write()?;
        let Some(slot) = tasks.iter_mut().find(|task| task.id == record.id) else {
            return Err(ServiceError::NotFound(format!("task {}", record.id)));
        };

        *slot = record.clone();
        tracing::trace!("Task replaced");
        Ok(record)
    }

    #[tracing::instrument(skip(self))]
    fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let mut tasks = self.write()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);

        if tasks.len() == before {
            return Err(ServiceError::NotFound(format!("task {id}")));
        }
        tracing::trace!(total = tasks.len(), "Task removed");
        Ok(())
    }

    fn get(&self, id: Uuid) -> ServiceResult<Option<TaskRecord>> {
        Ok(self.read()?.iter().find(|task| task.id == id).cloned())
    }

    fn list(&self) -> ServiceResult<Vec<TaskRecord>> {
        Ok(self.read()?.clone())
    }
}
