//! The `Inventory` facade over the store and query engine.

use crate::asset::{Asset, AssetId};
use crate::observability::EventLog;
use crate::query::{QueryCriteria, QueryEngine};
use crate::registry::AssetStore;

/// An in-memory inventory of compute assets
///
/// Owns an [`AssetStore`] and evaluates queries through a
/// [`QueryEngine`] borrowed over it per call. Single-threaded by
/// construction: a multi-threaded host must guard the whole value with
/// one exclusive lock per logical operation, so that match-then-remove
/// sequences never interleave with concurrent mutation.
pub struct Inventory {
    store: AssetStore,
    log: EventLog,
}

impl Inventory {
    /// Creates an empty inventory logging to standard output
    pub fn new() -> Self {
        Self::with_log(EventLog::stdout())
    }

    /// Creates an empty inventory with the given event log
    pub fn with_log(log: EventLog) -> Self {
        Self {
            store: AssetStore::new(),
            log,
        }
    }

    /// Creates an empty inventory that logs nothing
    pub fn silent() -> Self {
        Self::with_log(EventLog::disabled())
    }

    // =========================================================================
    // Asset CRUD
    // =========================================================================

    /// Stores an asset and returns its id
    pub fn add_asset(&mut self, asset: Asset) -> AssetId {
        self.log.info("add_asset", &[("asset", &asset.to_string())]);
        self.store.insert(asset)
    }

    /// Stores each asset in order; returned ids preserve input order
    pub fn add_assets(&mut self, assets: Vec<Asset>) -> Vec<AssetId> {
        self.log
            .info("add_assets", &[("count", &assets.len().to_string())]);
        self.store.insert_all(assets)
    }

    /// Looks up an asset by id
    pub fn get_asset_by_id(&mut self, id: &AssetId) -> Option<&Asset> {
        self.log.info("get_asset_by_id", &[("asset_id", &id.to_string())]);
        self.store.get(id)
    }

    /// Removes and returns the asset with the given id, if present
    pub fn delete_asset_by_id(&mut self, id: &AssetId) -> Option<Asset> {
        self.log
            .info("delete_asset_by_id", &[("asset_id", &id.to_string())]);
        self.store.remove(id)
    }

    /// Removes each listed id in order, collecting the assets that were
    /// present; unknown ids are silently skipped
    pub fn delete_assets_by_ids(&mut self, ids: &[AssetId]) -> Vec<Asset> {
        self.log
            .info("delete_assets_by_ids", &[("count", &ids.len().to_string())]);
        self.store.remove_all(ids)
    }

    // =========================================================================
    // Criteria-driven search and delete
    // =========================================================================

    /// Returns the assets matching the criteria; `None` and empty
    /// criteria both yield an empty list
    pub fn search(&mut self, criteria: Option<&QueryCriteria>) -> Vec<Asset> {
        self.log
            .info("search", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).search(criteria)
    }

    /// OR-search: concatenation of per-criterion results in list order
    pub fn search_any(&mut self, criteria: Option<&[QueryCriteria]>) -> Vec<Asset> {
        self.log
            .info("search_any", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).search_any(criteria)
    }

    /// Removes every asset matching the criteria, returning the removed
    /// assets; `None` and empty criteria leave the inventory untouched
    pub fn delete_assets(&mut self, criteria: Option<&QueryCriteria>) -> Vec<Asset> {
        self.log
            .info("delete_assets", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).delete(criteria)
    }

    /// Sequential criteria-list delete; each physically-matching asset is
    /// removed and reported at most once
    pub fn delete_assets_any(&mut self, criteria: Option<&[QueryCriteria]>) -> Vec<Asset> {
        self.log.info(
            "delete_assets_any",
            &[("criteria_count", &list_field(criteria))],
        );
        QueryEngine::new(&mut self.store).delete_any(criteria)
    }

    // =========================================================================
    // Full-inventory convenience accessors
    // =========================================================================

    /// Returns every stored asset.
    ///
    /// Reads the store directly; this is the "match everything" surface,
    /// deliberately separate from an empty criteria (which matches
    /// nothing).
    pub fn full_inventory(&mut self) -> Vec<Asset> {
        self.log.info("full_inventory", &[]);
        self.store.assets().cloned().collect()
    }

    /// Number of stored assets
    pub fn inventory_size(&mut self) -> usize {
        self.log.info("inventory_size", &[]);
        self.store.len()
    }

    // =========================================================================
    // Aggregations
    // =========================================================================

    /// Count of all stored assets
    pub fn total_assets(&mut self) -> usize {
        self.log.info("total_assets", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).total_assets()
    }

    /// Count of assets matching the criteria
    pub fn total_assets_where(&mut self, criteria: Option<&QueryCriteria>) -> usize {
        self.log
            .info("total_assets", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).total_assets_where(criteria)
    }

    /// Sum of per-criterion counts across the list
    pub fn total_assets_any(&mut self, criteria: Option<&[QueryCriteria]>) -> usize {
        self.log
            .info("total_assets", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).total_assets_any(criteria)
    }

    /// Total memory (GB) across the entire inventory
    pub fn total_memory(&mut self) -> u64 {
        self.log.info("total_memory", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).total_memory()
    }

    /// Total memory (GB) across matching assets
    pub fn total_memory_where(&mut self, criteria: Option<&QueryCriteria>) -> u64 {
        self.log
            .info("total_memory", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).total_memory_where(criteria)
    }

    /// Sum of per-criterion memory totals across the list
    pub fn total_memory_any(&mut self, criteria: Option<&[QueryCriteria]>) -> u64 {
        self.log
            .info("total_memory", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).total_memory_any(criteria)
    }

    /// Total cores across the entire inventory
    pub fn total_cores(&mut self) -> u64 {
        self.log.info("total_cores", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).total_cores()
    }

    /// Total cores across matching assets
    pub fn total_cores_where(&mut self, criteria: Option<&QueryCriteria>) -> u64 {
        self.log
            .info("total_cores", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).total_cores_where(criteria)
    }

    /// Sum of per-criterion core totals across the list
    pub fn total_cores_any(&mut self, criteria: Option<&[QueryCriteria]>) -> u64 {
        self.log
            .info("total_cores", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).total_cores_any(criteria)
    }

    /// Largest memory size in the inventory; 0 when empty
    pub fn max_memory(&mut self) -> u32 {
        self.log.info("max_memory", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).max_memory()
    }

    /// Largest memory size among matching assets; 0 when nothing matches
    pub fn max_memory_where(&mut self, criteria: Option<&QueryCriteria>) -> u32 {
        self.log
            .info("max_memory", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).max_memory_where(criteria)
    }

    /// Running maximum of per-criterion maxima across the list
    pub fn max_memory_any(&mut self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.log
            .info("max_memory", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).max_memory_any(criteria)
    }

    /// Largest core count in the inventory; 0 when empty
    pub fn max_cores(&mut self) -> u32 {
        self.log.info("max_cores", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).max_cores()
    }

    /// Largest core count among matching assets; 0 when nothing matches
    pub fn max_cores_where(&mut self, criteria: Option<&QueryCriteria>) -> u32 {
        self.log
            .info("max_cores", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).max_cores_where(criteria)
    }

    /// Running maximum of per-criterion maxima across the list
    pub fn max_cores_any(&mut self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.log
            .info("max_cores", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).max_cores_any(criteria)
    }

    /// Smallest memory size in the inventory; 0 when empty
    pub fn min_memory(&mut self) -> u32 {
        self.log.info("min_memory", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).min_memory()
    }

    /// Smallest memory size among matching assets; 0 when nothing matches
    pub fn min_memory_where(&mut self, criteria: Option<&QueryCriteria>) -> u32 {
        self.log
            .info("min_memory", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).min_memory_where(criteria)
    }

    /// Running minimum of per-criterion minima; `u32::MAX` seed for an
    /// empty list, 0 for an absent list
    pub fn min_memory_any(&mut self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.log
            .info("min_memory", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).min_memory_any(criteria)
    }

    /// Smallest core count in the inventory; 0 when empty
    pub fn min_cores(&mut self) -> u32 {
        self.log.info("min_cores", &[("scope", "all")]);
        QueryEngine::new(&mut self.store).min_cores()
    }

    /// Smallest core count among matching assets; 0 when nothing matches
    pub fn min_cores_where(&mut self, criteria: Option<&QueryCriteria>) -> u32 {
        self.log
            .info("min_cores", &[("criteria", &criteria_field(criteria))]);
        QueryEngine::new(&mut self.store).min_cores_where(criteria)
    }

    /// Running minimum of per-criterion minima; `u32::MAX` seed for an
    /// empty list, 0 for an absent list
    pub fn min_cores_any(&mut self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.log
            .info("min_cores", &[("criteria_count", &list_field(criteria))]);
        QueryEngine::new(&mut self.store).min_cores_any(criteria)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

fn criteria_field(criteria: Option<&QueryCriteria>) -> String {
    match criteria {
        Some(c) => c.to_string(),
        None => "none".to_string(),
    }
}

fn list_field(criteria: Option<&[QueryCriteria]>) -> String {
    match criteria {
        Some(list) => list.len().to_string(),
        None => "none".to_string(),
    }
}
