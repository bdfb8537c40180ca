//! Calendar stepping for recurrence specs.
//!
//! ## Month overflow policy
//! Monthly and yearly occurrences are computed from the anchor date, never
//! from the previous occurrence. When the anchor's day of month does not exist
//! in the target month, the occurrence falls on the last day of that month:
//!
//! - monthly from 2024-01-31: 2024-01-31, 2024-02-29, 2024-03-31, 2024-04-30
//! - yearly from 2024-02-29: 2024-02-29, 2025-02-28, 2026-02-28, ..., 2028-02-29
//!
//! Because each step restarts from the anchor, a clamped month never drags
//! later occurrences onto an earlier day.

use chrono::{Days, Months, NaiveDate};

use crate::rfc::recur::core::{Frequency, RecurrenceSpec};

/// ## Summary
/// Returns the `index`-th (0-based) step of a rule anchored at `start`,
/// ignoring any end policy.
///
/// Returns `None` when the step falls outside the representable date range.
#[must_use]
pub fn nth_occurrence(
    start: NaiveDate,
    frequency: Frequency,
    interval: u32,
    index: u32,
) -> Option<NaiveDate> {
    let steps = interval.checked_mul(index)?;
    match frequency {
        Frequency::Daily => start.checked_add_days(Days::new(u64::from(steps))),
        Frequency::Weekly => start.checked_add_days(Days::new(u64::from(steps) * 7)),
        // chrono clamps to the last valid day of the target month
        Frequency::Monthly => start.checked_add_months(Months::new(steps)),
        Frequency::Yearly => start.checked_add_months(Months::new(steps.checked_mul(12)?)),
    }
}

/// Ascending iterator over the occurrences of a spec, honoring its end policy.
///
/// Open-ended specs run until the calendar range is exhausted; callers bound
/// the iteration themselves (see `resolve`).
#[derive(Debug, Clone)]
pub struct Occurrences {
    spec: RecurrenceSpec,
    index: u32,
    done: bool,
}

impl Occurrences {
    #[must_use]
    pub const fn new(spec: RecurrenceSpec) -> Self {
        Self {
            spec,
            index: 0,
            done: false,
        }
    }
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(count) = self.spec.end_policy.max_occurrences()
            && self.index >= count
        {
            self.done = true;
            return None;
        }

        let Some(date) = nth_occurrence(
            self.spec.start_date,
            self.spec.frequency,
            self.spec.interval,
            self.index,
        ) else {
            self.done = true;
            return None;
        };

        if let Some(cutoff) = self.spec.end_policy.cutoff()
            && date > cutoff
        {
            self.done = true;
            return None;
        }

        match self.index.checked_add(1) {
            Some(next) => self.index = next,
            None => self.done = true,
        }

        Some(date)
    }
}

impl RecurrenceSpec {
    /// Returns an iterator over this spec's occurrences.
    #[must_use]
    pub const fn occurrences(&self) -> Occurrences {
        Occurrences::new(*self)
    }
}
