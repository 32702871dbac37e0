//! fleetdb - A strict, in-memory inventory registry for compute assets
//!
//! An id → asset store plus a criteria-driven query engine: point and
//! bulk CRUD, attribute filtering with OR-combined criteria lists, and
//! count/sum/min/max aggregations over the matched sets.
//!
//! ```
//! use fleetdb::asset::{Asset, CpuVendor, OperatingSystem};
//! use fleetdb::inventory::Inventory;
//! use fleetdb::query::QueryCriteria;
//!
//! let mut inventory = Inventory::silent();
//! inventory.add_asset(Asset::new(OperatingSystem::Linux, CpuVendor::Amd, 12, 32)?);
//!
//! let linux = QueryCriteria {
//!     os: Some(OperatingSystem::Linux),
//!     ..QueryCriteria::default()
//! };
//! assert_eq!(inventory.total_cores_where(Some(&linux)), 12);
//! # Ok::<(), fleetdb::asset::AssetError>(())
//! ```

pub mod asset;
pub mod inventory;
pub mod observability;
pub mod query;
pub mod registry;
