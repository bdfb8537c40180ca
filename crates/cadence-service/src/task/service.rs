//! Task create/update/delete/list orchestration.
//!
//! Each submission is resolved exactly once, when it is created or updated;
//! reads return the stored resolution as-is.

use chrono::Utc;
use uuid::Uuid;

use cadence_rfc::rfc::recur::{RecurrenceSpec, ResolvedRecurrence, parse_rule_text, resolve};

use super::{TaskForm, TaskRecord, TaskSubmission};
use crate::error::{ServiceError, ServiceResult};
use crate::store::TaskStore;

/// ## Summary
/// Validates and resolves a form without storing anything.
///
/// ## Errors
/// Returns `ValidationError` for missing required fields and `InvalidSpec`
/// when the recurrence cannot be resolved.
#[tracing::instrument(skip(form), fields(frequency = %form.frequency, end_type = %form.end_type))]
pub fn preview(form: TaskForm) -> ServiceResult<(TaskSubmission, ResolvedRecurrence)> {
    let submission = form.into_submission()?;
    let resolved = resolve(submission.spec)?;

    tracing::debug!(rule = %resolved.canonical_rule_text, "Previewed recurrence");
    Ok((submission, resolved))
}

/// ## Summary
/// Parses canonical rule text and resolves the resulting spec.
///
/// ## Errors
/// Returns `ParseError` for malformed rule text and `InvalidSpec` when the
/// parsed spec cannot be resolved.
#[tracing::instrument]
pub fn resolve_rule_text(text: &str) -> ServiceResult<(RecurrenceSpec, ResolvedRecurrence)> {
    let spec = parse_rule_text(text)?;
    let resolved = resolve(spec)?;
    Ok((spec, resolved))
}

/// ## Summary
/// Creates a task from a submitted form.
///
/// ## Side Effects
/// Appends a record to the store.
///
/// ## Errors
/// Returns `ValidationError`/`InvalidSpec` for a rejected form; the store is
/// left untouched in that case. Propagates store errors.
#[tracing::instrument(skip(store, form))]
pub fn create_task(store: &dyn TaskStore, form: TaskForm) -> ServiceResult<TaskRecord> {
    let (submission, resolved) = preview(form)?;
    let record = store.create(TaskRecord::new(submission.name, submission.spec, resolved))?;

    tracing::info!(task_id = %record.id, "Task created");
    Ok(record)
}

/// ## Summary
/// Re-submits an existing task, recomputing its resolved recurrence.
///
/// The creation timestamp and list position are kept.
///
/// ## Side Effects
/// Replaces the record in the store.
///
/// ## Errors
/// Returns `NotFound` for an unknown id, `ValidationError`/`InvalidSpec` for a
/// rejected form, and propagates store errors.
#[tracing::instrument(skip(store, form))]
pub fn update_task(store: &dyn TaskStore, id: Uuid, form: TaskForm) -> ServiceResult<TaskRecord> {
    let existing = get_task(store, id)?;
    let (submission, resolved) = preview(form)?;

    let record = store.update(TaskRecord {
        id,
        name: submission.name,
        spec: submission.spec,
        resolved,
        created_at: existing.created_at,
        updated_at: Utc::now(),
    })?;

    tracing::info!(task_id = %record.id, "Task updated");
    Ok(record)
}

/// ## Summary
/// Deletes a task.
///
/// ## Errors
/// Returns `NotFound` for an unknown id and propagates store errors.
#[tracing::instrument(skip(store))]
pub fn delete_task(store: &dyn TaskStore, id: Uuid) -> ServiceResult<()> {
    store.delete(id)?;
    tracing::info!(task_id = %id, "Task deleted");
    Ok(())
}

/// ## Summary
/// Fetches a task.
///
/// ## Errors
/// Returns `NotFound` for an unknown id and propagates store errors.
pub fn get_task(store: &dyn TaskStore, id: Uuid) -> ServiceResult<TaskRecord> {
    store
        .get(id)?
        .ok_or_else(|| ServiceError::NotFound(format!("task {id}")))
}

/// ## Summary
/// Lists all tasks in creation order.
///
/// ## Errors
/// Propagates store errors.
pub fn list_tasks(store: &dyn TaskStore) -> ServiceResult<Vec<TaskRecord>> {
    store.list()
}

/// ## Summary
/// Returns a form prefilled from a stored task, for editing.
///
/// ## Errors
/// Returns `NotFound` for an unknown id and propagates store errors.
pub fn edit_form(store: &dyn TaskStore, id: Uuid) -> ServiceResult<TaskForm> {
    Ok(TaskForm::from_record(&get_task(store, id)?))
}
