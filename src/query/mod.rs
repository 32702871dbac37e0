//! Query engine for fleetdb
//!
//! Translates a sparse criteria specification into a predicate over
//! stored assets, evaluates it by full scan, and exposes aggregation
//! operations (count, sum, min, max) on top of matching.
//!
//! # Matching semantics
//!
//! - Every field present in a criteria must be exactly equal on the asset
//!   (AND across present fields); absent fields impose no constraint
//! - An empty criteria (no fields set) matches nothing
//! - A criteria list is a logical OR: list operations decompose into
//!   repeated single-criteria evaluations and combine the results
//!
//! Whole-store aggregate forms are a separate, explicit surface; they
//! never go through an empty-criteria search.

mod criteria;
mod engine;
mod filter;

pub use criteria::QueryCriteria;
pub use engine::QueryEngine;
pub use filter::CriteriaFilter;
