//! HTTP surface for recurring tasks.

pub mod app;
pub mod config;
pub mod error;
pub mod store_handler;
