//! Recurrence rule model, canonical rule text codec and occurrence resolver.

pub mod error;
pub mod rfc;
