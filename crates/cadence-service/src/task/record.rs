use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cadence_rfc::rfc::recur::{RecurrenceSpec, ResolvedRecurrence};

/// A stored recurring task with its resolved recurrence attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub name: String,
    pub spec: RecurrenceSpec,
    /// Computed when the task was last submitted; never refreshed on read.
    pub resolved: ResolvedRecurrence,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a record with a fresh time-ordered id.
    #[must_use]
    pub fn new(name: String, spec: RecurrenceSpec, resolved: ResolvedRecurrence) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            spec,
            resolved,
            created_at: now,
            updated_at: now,
        }
    }
}
