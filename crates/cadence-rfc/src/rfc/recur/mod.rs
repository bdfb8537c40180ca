//! Recurring task rules (an RFC 5545 RRULE subset).
//!
//! A rule is a frequency unit, an interval multiplier, a start date and an
//! optional termination condition. This module provides:
//! - `core`: the rule model
//! - `expand`: calendar stepping and the occurrence preview resolver
//! - `build` / `parse`: the canonical rule text and its parser

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;


pub use self::core::{EndPolicy, Frequency, RecurrenceSpec};
pub use expand::{Occurrences, PREVIEW_LIMIT, ResolvedRecurrence, resolve};
pub use parse::parse_rule_text;
