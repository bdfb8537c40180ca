//! Canonical rule text serialization.
//!
//! Grammar (pairs always emitted in this order):
//!
//! ```text
//! FREQ=<DAILY|WEEKLY|MONTHLY|YEARLY>;INTERVAL=<n>;DTSTART=<YYYYMMDD>[;COUNT=<n>|;UNTIL=<YYYYMMDD>]
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::rfc::recur::core::{EndPolicy, RecurrenceSpec};

/// Formats a date as an RFC 5545 DATE value (`YYYYMMDD`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

impl fmt::Display for RecurrenceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FREQ={};INTERVAL={};DTSTART={}",
            self.frequency,
            self.interval,
            format_date(self.start_date)
        )?;

        match self.end_policy {
            EndPolicy::Never => Ok(()),
            EndPolicy::AfterOccurrences { count } => write!(f, ";COUNT={count}"),
            EndPolicy::UntilDate { date } => write!(f, ";UNTIL={}", format_date(date)),
        }
    }
}

impl RecurrenceSpec {
    /// ## Summary
    /// Renders the spec as an iCalendar `DTSTART`/`RRULE` pair.
    ///
    /// The anchor is midnight UTC and the cutoff is the last second of the
    /// until date, so date-level rules expand identically in engines that
    /// only understand DATE-TIME values.
    #[must_use]
    pub fn to_rfc5545(&self) -> String {
        let mut rule = format!("FREQ={};INTERVAL={}", self.frequency, self.interval);
        match self.end_policy {
            EndPolicy::Never => {}
            EndPolicy::AfterOccurrences { count } => rule.push_str(&format!(";COUNT={count}")),
            EndPolicy::UntilDate { date } => {
                rule.push_str(&format!(";UNTIL={}T235959Z", format_date(date)));
            }
        }

        format!(
            "DTSTART:{}T000000Z\nRRULE:{rule}",
            format_date(self.start_date)
        )
    }
}
