//! Recurrence spec: frequency, interval, anchor date and end policy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Frequency;
use crate::error::{InvalidSpecReason, RfcResult};

/// Termination condition of a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EndPolicy {
    /// Open-ended.
    #[default]
    Never,
    /// Ends after a fixed number of occurrences (the first one included).
    AfterOccurrences { count: u32 },
    /// Ends on a cutoff date (inclusive).
    UntilDate { date: NaiveDate },
}

impl EndPolicy {
    /// Returns the occurrence cap implied by the policy, if any.
    #[must_use]
    pub const fn max_occurrences(self) -> Option<u32> {
        match self {
            Self::AfterOccurrences { count } => Some(count),
            Self::Never | Self::UntilDate { .. } => None,
        }
    }

    /// Returns the inclusive cutoff date, if any.
    #[must_use]
    pub const fn cutoff(self) -> Option<NaiveDate> {
        match self {
            Self::UntilDate { date } => Some(date),
            Self::Never | Self::AfterOccurrences { .. } => None,
        }
    }
}

/// Description of how a task repeats.
///
/// Specs are plain values: build a fresh one per resolution instead of
/// mutating a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecurrenceSpec {
    pub frequency: Frequency,
    /// Multiplier on the frequency unit (must be at least 1).
    pub interval: u32,
    /// Anchor date; always the first occurrence.
    pub start_date: NaiveDate,
    pub end_policy: EndPolicy,
}

impl RecurrenceSpec {
    /// Creates an open-ended spec stepping by one `frequency` unit.
    #[must_use]
    pub const fn new(frequency: Frequency, start_date: NaiveDate) -> Self {
        Self {
            frequency,
            interval: 1,
            start_date,
            end_policy: EndPolicy::Never,
        }
    }

    /// Sets the interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the end policy.
    #[must_use]
    pub const fn with_end_policy(mut self, end_policy: EndPolicy) -> Self {
        self.end_policy = end_policy;
        self
    }

    /// Ends the recurrence after `count` occurrences.
    #[must_use]
    pub const fn with_count(self, count: u32) -> Self {
        self.with_end_policy(EndPolicy::AfterOccurrences { count })
    }

    /// Ends the recurrence on `date` (inclusive).
    #[must_use]
    pub const fn with_until(self, date: NaiveDate) -> Self {
        self.with_end_policy(EndPolicy::UntilDate { date })
    }

    /// ## Summary
    /// Checks the numeric and date bounds of the spec.
    ///
    /// ## Errors
    /// Returns `InvalidSpec` if the interval is zero, the occurrence count is
    /// zero, or the until date falls before the start date.
    pub fn validate(&self) -> RfcResult<()> {
        if self.interval == 0 {
            return Err(InvalidSpecReason::InvalidInterval(i64::from(self.interval)).into());
        }

        match self.end_policy {
            EndPolicy::AfterOccurrences { count } if count == 0 => {
                Err(InvalidSpecReason::InvalidOccurrenceCount(i64::from(count)).into())
            }
            EndPolicy::UntilDate { date } if date < self.start_date => {
                Err(InvalidSpecReason::UntilBeforeStart {
                    start: self.start_date,
                    until: date,
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}
