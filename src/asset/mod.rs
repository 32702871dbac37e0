//! Asset model for fleetdb
//!
//! An asset is an immutable record describing one compute resource:
//! operating system, CPU vendor, core count, and memory size. All four
//! descriptive attributes are required and validated at construction;
//! a validation failure never produces a partially-formed asset.
//!
//! # Invariants
//!
//! - Asset ids are assigned once at construction and never reused
//! - `cores` and `memory_gb` are strictly positive
//! - Assets are never mutated after construction

mod errors;
mod model;
mod types;

pub use errors::{AssetError, AssetResult};
pub use model::{Asset, AssetId};
pub use types::{CpuVendor, OperatingSystem};
