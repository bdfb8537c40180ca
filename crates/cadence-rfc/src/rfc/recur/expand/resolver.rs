//! Occurrence preview resolver.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RfcResult;
use crate::rfc::recur::core::RecurrenceSpec;

/// Maximum number of occurrences returned in a preview.
pub const PREVIEW_LIMIT: usize = 3;

/// Canonical rule text and the first occurrences of a recurrence spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecurrence {
    /// Re-parseable encoding of the spec (see `build`).
    pub canonical_rule_text: String,
    /// Earliest occurrences on or after the start date, ascending.
    pub preview_dates: Vec<NaiveDate>,
}

impl ResolvedRecurrence {
    /// Renders the preview dates for display, e.g. `Mon Jan 01 2024`.
    #[must_use]
    pub fn preview_labels(&self) -> Vec<String> {
        self.preview_dates
            .iter()
            .map(|date| date.format("%a %b %d %Y").to_string())
            .collect()
    }
}

/// ## Summary
/// Resolves a recurrence spec into its canonical rule text and a preview of
/// at most `PREVIEW_LIMIT` occurrences.
///
/// Enumeration stops at the preview limit or when the end policy is reached,
/// whichever comes first.
///
/// ## Errors
/// Returns `InvalidSpec` if the interval or occurrence count is zero, or if
/// the until date falls before the start date.
///
/// ## Side Effects
/// None.
pub fn resolve(spec: RecurrenceSpec) -> RfcResult<ResolvedRecurrence> {
    spec.validate()?;

    let preview_dates: Vec<NaiveDate> = spec.occurrences().take(PREVIEW_LIMIT).collect();
    let canonical_rule_text = spec.to_string();

    tracing::trace!(
        rule = %canonical_rule_text,
        previews = preview_dates.len(),
        "Resolved recurrence"
    );

    Ok(ResolvedRecurrence {
        canonical_rule_text,
        preview_dates,
    })
}
