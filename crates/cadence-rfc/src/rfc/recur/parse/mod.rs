//! Canonical rule text parser.
//!
//! Accepts the grammar emitted by `build` with some leniency: keys are
//! case-insensitive, pairs may come in any order, `INTERVAL` defaults to 1 and
//! an `RRULE:` prefix is ignored. Bounds (zero interval, until before start)
//! are left to `RecurrenceSpec::validate`.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{RfcError, RfcResult};
use crate::rfc::recur::core::{EndPolicy, Frequency, RecurrenceSpec};

fn parse_error(message: impl Into<String>) -> RfcError {
    RfcError::ParseError(message.into())
}

/// ## Summary
/// Parses a DATE value (`YYYYMMDD`, wider years allowed before `MMDD`).
///
/// ## Errors
/// Returns a parse error if the value is not a valid calendar date.
pub fn parse_date(s: &str) -> RfcResult<NaiveDate> {
    if s.len() < 8 || !s.is_ascii() {
        return Err(parse_error(format!("invalid date: {s}")));
    }

    let (year, month_day) = s.split_at(s.len() - 4);
    if !month_day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error(format!("invalid date: {s}")));
    }

    let year = year
        .parse::<i32>()
        .map_err(|e| parse_error(format!("invalid year in date {s}: {e}")))?;
    let month = month_day[0..2]
        .parse::<u32>()
        .map_err(|e| parse_error(format!("invalid month in date {s}: {e}")))?;
    let day = month_day[2..4]
        .parse::<u32>()
        .map_err(|e| parse_error(format!("invalid day in date {s}: {e}")))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| parse_error(format!("date out of range: {s}")))
}

fn parse_number(key: &str, value: &str) -> RfcResult<u32> {
    value
        .parse::<u32>()
        .map_err(|e| parse_error(format!("invalid {key} value {value:?}: {e}")))
}

fn set_once<T>(slot: &mut Option<T>, key: &str, value: T) -> RfcResult<()> {
    if slot.is_some() {
        return Err(parse_error(format!("duplicate {key}")));
    }
    *slot = Some(value);
    Ok(())
}

/// ## Summary
/// Parses canonical rule text back into a `RecurrenceSpec`.
///
/// ## Errors
/// Returns a parse error for malformed pairs, unknown or duplicate keys,
/// malformed numbers or dates, a missing `FREQ` or `DTSTART`, or `COUNT`
/// combined with `UNTIL`. Returns `InvalidSpec` for an unknown frequency.
pub fn parse_rule_text(text: &str) -> RfcResult<RecurrenceSpec> {
    let trimmed = text.trim();
    let body = match trimmed.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("RRULE:") => &trimmed[6..],
        _ => trimmed,
    };

    let mut frequency = None;
    let mut interval = None;
    let mut start_date = None;
    let mut count = None;
    let mut until = None;

    for pair in body.split(';').filter(|pair| !pair.trim().is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| parse_error(format!("expected KEY=VALUE, found {pair:?}")))?;
        let key = key.trim().to_ascii_uppercase();
        let value = value.trim();

        match key.as_str() {
            "FREQ" => set_once(&mut frequency, "FREQ", value.parse::<Frequency>()?)?,
            "INTERVAL" => {
                set_once(&mut interval, "INTERVAL", parse_number("INTERVAL", value)?)?;
            }
            "DTSTART" => set_once(&mut start_date, "DTSTART", parse_date(value)?)?,
            "COUNT" => set_once(&mut count, "COUNT", parse_number("COUNT", value)?)?,
            "UNTIL" => set_once(&mut until, "UNTIL", parse_date(value)?)?,
            other => return Err(parse_error(format!("unknown rule part: {other}"))),
        }
    }

    let frequency = frequency.ok_or_else(|| parse_error("missing FREQ"))?;
    let start_date = start_date.ok_or_else(|| parse_error("missing DTSTART"))?;

    let end_policy = match (count, until) {
        (None, None) => EndPolicy::Never,
        (Some(count), None) => EndPolicy::AfterOccurrences { count },
        (None, Some(date)) => EndPolicy::UntilDate { date },
        (Some(_), Some(_)) => return Err(parse_error("COUNT and UNTIL are mutually exclusive")),
    };

    Ok(RecurrenceSpec {
        frequency,
        interval: interval.unwrap_or(1),
        start_date,
        end_policy,
    })
}

impl FromStr for RecurrenceSpec {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule_text(s)
    }
}
