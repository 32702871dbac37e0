//! Inventory facade for fleetdb
//!
//! The programmatic API boundary: one value that owns the asset store,
//! runs every query through the query engine, and emits a structured log
//! event per operation invocation.

mod facade;

pub use facade::Inventory;
