//! Observability subsystem for memberdb
//!
//! Structured JSON logging for store lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on store state
//! 2. Synchronous, no buffering, one log line per event
//! 3. Deterministic output: alphabetical field ordering

mod logger;

pub use logger::{Logger, Severity};
