use chrono::NaiveDate;
use thiserror::Error;

/// Reason a recurrence spec was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSpecReason {
    #[error("interval must be a positive integer, got {0}")]
    InvalidInterval(i64),

    #[error("occurrence count must be a positive integer, got {0}")]
    InvalidOccurrenceCount(i64),

    #[error("until date {until} is before start date {start}")]
    UntilBeforeStart { start: NaiveDate, until: NaiveDate },

    #[error("unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("unknown end condition: {0}")]
    UnknownEndCondition(String),

    #[error("an until date is required when the recurrence ends on a date")]
    MissingUntilDate,
}

/// Recurrence rule parsing and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid recurrence spec: {0}")]
    InvalidSpec(#[from] InvalidSpecReason),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
