//! Recurrence rule model.

mod frequency;
mod spec;

pub use frequency::Frequency;
pub use spec::{EndPolicy, RecurrenceSpec};
