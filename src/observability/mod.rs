//! Observability for fleetdb
//!
//! Structured operation logging only; metrics and tracing backends are a
//! host concern. The log is synchronous and line-oriented: one event per
//! line, deterministic field ordering.

mod logger;

pub use logger::{EventLog, Severity};
