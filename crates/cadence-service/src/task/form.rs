//! Task form model.
//!
//! A `TaskForm` carries the fields a user submits. Text and integer fields are
//! only turned into a typed `RecurrenceSpec` by `TaskForm::into_submission`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use cadence_rfc::error::{InvalidSpecReason, RfcError};
use cadence_rfc::rfc::recur::{EndPolicy, Frequency, RecurrenceSpec};

use super::TaskRecord;
use crate::error::{ServiceError, ServiceResult};

/// Occurrence count shown in a fresh form.
pub const DEFAULT_OCCURRENCE_COUNT: i64 = 5;

/// End condition selected in a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndType {
    Never,
    Count,
    Until,
}

impl EndType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Count => "count",
            Self::Until => "until",
        }
    }

    #[must_use]
    pub const fn of(policy: EndPolicy) -> Self {
        match policy {
            EndPolicy::Never => Self::Never,
            EndPolicy::AfterOccurrences { .. } => Self::Count,
            EndPolicy::UntilDate { .. } => Self::Until,
        }
    }
}

impl fmt::Display for EndType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndType {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "count" => Ok(Self::Count),
            "until" => Ok(Self::Until),
            _ => Err(InvalidSpecReason::UnknownEndCondition(s.to_string()).into()),
        }
    }
}

/// Fields submitted to create or edit a recurring task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskForm {
    pub name: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub start_date: Option<NaiveDate>,
    pub frequency: String,
    #[serde(deserialize_with = "int_or_text")]
    pub interval: i64,
    pub end_type: String,
    #[serde(deserialize_with = "int_or_text")]
    pub count: i64,
    #[serde(deserialize_with = "blank_as_none")]
    pub until: Option<NaiveDate>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            start_date: None,
            frequency: Frequency::Daily.label().to_string(),
            interval: 1,
            end_type: EndType::Never.as_str().to_string(),
            count: DEFAULT_OCCURRENCE_COUNT,
            until: None,
        }
    }
}

/// Empty date inputs arrive as `""`; treat them like a missing value.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

/// Number inputs may arrive as JSON integers or as their text. Blank text
/// reads as 0 so range checks reject it like any other non-positive value.
fn int_or_text<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrText::deserialize(deserializer)? {
        IntOrText::Int(value) => Ok(value),
        IntOrText::Text(text) => match text.trim() {
            "" => Ok(0),
            value => value.parse().map_err(serde::de::Error::custom),
        },
    }
}

/// A validated form: the task name and the spec to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSubmission {
    pub name: String,
    pub spec: RecurrenceSpec,
}

impl TaskForm {
    /// ## Summary
    /// Prefills a form from a stored task for editing.
    ///
    /// Fields the task's end policy does not use keep their defaults.
    #[must_use]
    pub fn from_record(record: &TaskRecord) -> Self {
        let spec = &record.spec;
        let mut form = Self {
            name: record.name.clone(),
            start_date: Some(spec.start_date),
            frequency: spec.frequency.label().to_string(),
            interval: i64::from(spec.interval),
            end_type: EndType::of(spec.end_policy).as_str().to_string(),
            ..Self::default()
        };

        match spec.end_policy {
            EndPolicy::Never => {}
            EndPolicy::AfterOccurrences { count } => form.count = i64::from(count),
            EndPolicy::UntilDate { date } => form.until = Some(date),
        }

        form
    }

    /// ## Summary
    /// Checks required fields and converts the form into a recurrence spec.
    ///
    /// ## Errors
    /// Returns `ValidationError` if the name or start date is missing.
    /// Returns `InvalidSpec` for an unknown frequency or end condition, an
    /// interval or count below 1, or an until end condition without a date.
    pub fn into_submission(self) -> ServiceResult<TaskSubmission> {
        let name = self.name.trim();
        let Some(start_date) = self.start_date.filter(|_| !name.is_empty()) else {
            return Err(ServiceError::ValidationError(
                "Task name and start date required".to_string(),
            ));
        };

        let frequency = self.frequency.parse::<Frequency>()?;
        let interval = positive(self.interval)
            .ok_or(InvalidSpecReason::InvalidInterval(self.interval))
            .map_err(RfcError::from)?;

        let end_policy = match self.end_type.parse::<EndType>()? {
            EndType::Never => EndPolicy::Never,
            EndType::Count => EndPolicy::AfterOccurrences {
                count: positive(self.count)
                    .ok_or(InvalidSpecReason::InvalidOccurrenceCount(self.count))
                    .map_err(RfcError::from)?,
            },
            EndType::Until => EndPolicy::UntilDate {
                date: self
                    .until
                    .ok_or(InvalidSpecReason::MissingUntilDate)
                    .map_err(RfcError::from)?,
            },
        };

        Ok(TaskSubmission {
            name: name.to_string(),
            spec: RecurrenceSpec {
                frequency,
                interval,
                start_date,
                end_policy,
            },
        })
    }
}

fn positive(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}
