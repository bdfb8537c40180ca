//! Occurrence expansion for recurrence specs.

mod calendar;
mod resolver;

pub use calendar::{Occurrences, nth_occurrence};
pub use resolver::{PREVIEW_LIMIT, ResolvedRecurrence, resolve};
