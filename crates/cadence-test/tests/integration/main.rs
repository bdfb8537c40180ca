//! End-to-end tests driving the full router against an in-memory store.

mod recurrence;
mod tasks;
