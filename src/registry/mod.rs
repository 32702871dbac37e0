//! Asset store subsystem for fleetdb
//!
//! The store is an owned, in-memory id → asset map. There is no ambient
//! or static state: every store is an independent value, so multiple
//! registries can coexist in one process.
//!
//! # Invariants
//!
//! - Ids are unique within the map
//! - Entries are added and removed one at a time; bulk forms are
//!   sequential single operations
//! - No store operation fails; absence is `Option` or an empty result

mod store;

pub use store::AssetStore;
