//! Query execution against a borrowed asset store.
//!
//! Execution flow for every operation:
//! 1. Full-scan the store's entries
//! 2. Filter strictly via `CriteriaFilter`
//! 3. Reduce (collect, count, sum, min, max) as the operation requires
//!
//! Criteria-list operations decompose into repeated single-criteria
//! evaluations: concatenation for search and delete, summation for
//! totals, running max/min for extremes.

use crate::asset::{Asset, AssetId};
use crate::registry::AssetStore;

use super::criteria::QueryCriteria;
use super::filter::CriteriaFilter;

/// Query engine evaluating criteria against a borrowed store
///
/// Criteria arguments are `Option`s: `None` means "no filter specified"
/// and yields the neutral result (empty list or 0) without touching the
/// store. That is distinct from an empty criteria, which is a real filter
/// that matches nothing, and from the whole-store aggregate forms, which
/// take no criteria at all and unconditionally cover every stored asset.
pub struct QueryEngine<'a> {
    store: &'a mut AssetStore,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over the given store
    pub fn new(store: &'a mut AssetStore) -> Self {
        Self { store }
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Returns the assets matching the criteria, in store-iteration order.
    ///
    /// No externally meaningful order is guaranteed. `None` and empty
    /// criteria both produce an empty list.
    pub fn search(&self, criteria: Option<&QueryCriteria>) -> Vec<Asset> {
        let Some(criteria) = criteria else {
            return Vec::new();
        };

        self.store
            .assets()
            .filter(|asset| CriteriaFilter::matches(criteria, asset))
            .cloned()
            .collect()
    }

    /// Returns the concatenation of `search` results for each criteria in
    /// list order (logical OR).
    ///
    /// An asset matching multiple list entries appears once per matching
    /// entry; results are not deduplicated.
    pub fn search_any(&self, criteria: Option<&[QueryCriteria]>) -> Vec<Asset> {
        let Some(list) = criteria else {
            return Vec::new();
        };

        let mut result = Vec::new();
        for c in list {
            result.extend(self.search(Some(c)));
        }
        result
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Removes every asset matching the criteria and returns the removed
    /// assets. `None` and empty criteria leave the store untouched.
    pub fn delete(&mut self, criteria: Option<&QueryCriteria>) -> Vec<Asset> {
        let Some(criteria) = criteria else {
            return Vec::new();
        };

        let matched: Vec<AssetId> = self
            .store
            .entries()
            .filter(|(_, asset)| CriteriaFilter::matches(criteria, asset))
            .map(|(id, _)| *id)
            .collect();

        self.store.remove_all(&matched)
    }

    /// Sequential `delete` per list entry, concatenated.
    ///
    /// Deletion mutates the store between iterations, so an asset is
    /// removed and reported at most once even when it matches several
    /// criteria in the list; the first matching criterion claims it.
    pub fn delete_any(&mut self, criteria: Option<&[QueryCriteria]>) -> Vec<Asset> {
        let Some(list) = criteria else {
            return Vec::new();
        };

        let mut removed = Vec::new();
        for c in list {
            removed.extend(self.delete(Some(c)));
        }
        removed
    }

    // =========================================================================
    // Counts
    // =========================================================================

    /// Number of assets in the store
    pub fn total_assets(&self) -> usize {
        self.store.len()
    }

    /// Number of assets matching the criteria
    pub fn total_assets_where(&self, criteria: Option<&QueryCriteria>) -> usize {
        let Some(criteria) = criteria else {
            return 0;
        };

        self.store
            .assets()
            .filter(|asset| CriteriaFilter::matches(criteria, asset))
            .count()
    }

    /// Sum of per-criterion counts across the list.
    ///
    /// An asset matching multiple list entries is counted once per entry,
    /// mirroring `search_any`'s concatenation.
    pub fn total_assets_any(&self, criteria: Option<&[QueryCriteria]>) -> usize {
        let Some(list) = criteria else {
            return 0;
        };

        list.iter()
            .map(|c| self.total_assets_where(Some(c)))
            .sum()
    }

    // =========================================================================
    // Sums
    // =========================================================================

    /// Total memory (GB) across the entire store
    pub fn total_memory(&self) -> u64 {
        self.sum_all(Asset::memory_gb)
    }

    /// Total memory (GB) across assets matching the criteria
    pub fn total_memory_where(&self, criteria: Option<&QueryCriteria>) -> u64 {
        self.sum_where(criteria, Asset::memory_gb)
    }

    /// Sum of per-criterion memory totals across the list
    pub fn total_memory_any(&self, criteria: Option<&[QueryCriteria]>) -> u64 {
        self.sum_any(criteria, Asset::memory_gb)
    }

    /// Total cores across the entire store
    pub fn total_cores(&self) -> u64 {
        self.sum_all(Asset::cores)
    }

    /// Total cores across assets matching the criteria
    pub fn total_cores_where(&self, criteria: Option<&QueryCriteria>) -> u64 {
        self.sum_where(criteria, Asset::cores)
    }

    /// Sum of per-criterion core totals across the list
    pub fn total_cores_any(&self, criteria: Option<&[QueryCriteria]>) -> u64 {
        self.sum_any(criteria, Asset::cores)
    }

    // =========================================================================
    // Extremes
    // =========================================================================

    /// Largest memory size in the store; 0 when the store is empty
    pub fn max_memory(&self) -> u32 {
        self.max_all(Asset::memory_gb)
    }

    /// Largest memory size among matching assets; 0 when nothing matches
    pub fn max_memory_where(&self, criteria: Option<&QueryCriteria>) -> u32 {
        self.max_where(criteria, Asset::memory_gb)
    }

    /// Running maximum of per-criterion maxima across the list
    pub fn max_memory_any(&self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.max_any(criteria, Asset::memory_gb)
    }

    /// Largest core count in the store; 0 when the store is empty
    pub fn max_cores(&self) -> u32 {
        self.max_all(Asset::cores)
    }

    /// Largest core count among matching assets; 0 when nothing matches
    pub fn max_cores_where(&self, criteria: Option<&QueryCriteria>) -> u32 {
        self.max_where(criteria, Asset::cores)
    }

    /// Running maximum of per-criterion maxima across the list
    pub fn max_cores_any(&self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.max_any(criteria, Asset::cores)
    }

    /// Smallest memory size in the store; 0 when the store is empty
    /// (documented sentinel floor, not a computed minimum)
    pub fn min_memory(&self) -> u32 {
        self.min_all(Asset::memory_gb)
    }

    /// Smallest memory size among matching assets; 0 when nothing matches
    pub fn min_memory_where(&self, criteria: Option<&QueryCriteria>) -> u32 {
        self.min_where(criteria, Asset::memory_gb)
    }

    /// Running minimum of per-criterion minima across the list.
    ///
    /// The reduction is seeded at `u32::MAX` so the first criterion's
    /// minimum always wins; an empty list therefore returns `u32::MAX`,
    /// while an absent (`None`) list returns 0.
    pub fn min_memory_any(&self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.min_any(criteria, Asset::memory_gb)
    }

    /// Smallest core count in the store; 0 when the store is empty
    pub fn min_cores(&self) -> u32 {
        self.min_all(Asset::cores)
    }

    /// Smallest core count among matching assets; 0 when nothing matches
    pub fn min_cores_where(&self, criteria: Option<&QueryCriteria>) -> u32 {
        self.min_where(criteria, Asset::cores)
    }

    /// Running minimum of per-criterion minima across the list; same
    /// seeding rules as [`QueryEngine::min_memory_any`]
    pub fn min_cores_any(&self, criteria: Option<&[QueryCriteria]>) -> u32 {
        self.min_any(criteria, Asset::cores)
    }

    // =========================================================================
    // Reduction helpers
    // =========================================================================

    fn sum_all(&self, field: fn(&Asset) -> u32) -> u64 {
        self.store.assets().map(|a| u64::from(field(a))).sum()
    }

    fn sum_where(&self, criteria: Option<&QueryCriteria>, field: fn(&Asset) -> u32) -> u64 {
        let Some(criteria) = criteria else {
            return 0;
        };

        self.store
            .assets()
            .filter(|asset| CriteriaFilter::matches(criteria, asset))
            .map(|a| u64::from(field(a)))
            .sum()
    }

    fn sum_any(&self, criteria: Option<&[QueryCriteria]>, field: fn(&Asset) -> u32) -> u64 {
        let Some(list) = criteria else {
            return 0;
        };

        list.iter().map(|c| self.sum_where(Some(c), field)).sum()
    }

    fn max_all(&self, field: fn(&Asset) -> u32) -> u32 {
        self.store.assets().map(field).max().unwrap_or(0)
    }

    fn max_where(&self, criteria: Option<&QueryCriteria>, field: fn(&Asset) -> u32) -> u32 {
        let Some(criteria) = criteria else {
            return 0;
        };

        self.store
            .assets()
            .filter(|asset| CriteriaFilter::matches(criteria, asset))
            .map(field)
            .max()
            .unwrap_or(0)
    }

    fn max_any(&self, criteria: Option<&[QueryCriteria]>, field: fn(&Asset) -> u32) -> u32 {
        let Some(list) = criteria else {
            return 0;
        };

        let mut result = 0;
        for c in list {
            result = result.max(self.max_where(Some(c), field));
        }
        result
    }

    fn min_all(&self, field: fn(&Asset) -> u32) -> u32 {
        self.store.assets().map(field).min().unwrap_or(0)
    }

    fn min_where(&self, criteria: Option<&QueryCriteria>, field: fn(&Asset) -> u32) -> u32 {
        let Some(criteria) = criteria else {
            return 0;
        };

        self.store
            .assets()
            .filter(|asset| CriteriaFilter::matches(criteria, asset))
            .map(field)
            .min()
            .unwrap_or(0)
    }

    fn min_any(&self, criteria: Option<&[QueryCriteria]>, field: fn(&Asset) -> u32) -> u32 {
        let Some(list) = criteria else {
            // Absent list overrides the seed
            return 0;
        };

        // Seed at the maximum representable value so the first
        // criterion's minimum always wins
        let mut result = u32::MAX;
        for c in list {
            result = result.min(self.min_where(Some(c), field));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{CpuVendor, OperatingSystem};

    fn make_asset(os: OperatingSystem, cpu: CpuVendor, cores: u32, memory_gb: u32) -> Asset {
        Asset::new(os, cpu, cores, memory_gb).unwrap()
    }

    fn seeded_store() -> AssetStore {
        let mut store = AssetStore::new();
        store.insert(make_asset(
            OperatingSystem::Windows,
            CpuVendor::Amd,
            12,
            32,
        ));
        store.insert(make_asset(
            OperatingSystem::MacOs,
            CpuVendor::Intel,
            12,
            32,
        ));
        store.insert(make_asset(
            OperatingSystem::Linux,
            CpuVendor::AppleSilicon,
            12,
            32,
        ));
        store
    }

    #[test]
    fn test_search_exact_match() {
        let mut store = seeded_store();
        let engine = QueryEngine::new(&mut store);

        let c = QueryCriteria {
            cpu: Some(CpuVendor::Amd),
            cores: Some(12),
            memory_gb: Some(32),
            ..QueryCriteria::default()
        };
        let result = engine.search(Some(&c));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].os(), OperatingSystem::Windows);
    }

    #[test]
    fn test_search_empty_criteria_returns_nothing() {
        let mut store = seeded_store();
        let engine = QueryEngine::new(&mut store);

        assert!(engine.search(Some(&QueryCriteria::default())).is_empty());
        assert!(engine.search(None).is_empty());
    }

    #[test]
    fn test_search_any_concatenates_without_dedup() {
        let mut store = AssetStore::new();
        store.insert(make_asset(OperatingSystem::Linux, CpuVendor::Amd, 8, 16));

        // Both criteria match the single stored asset
        let list = vec![
            QueryCriteria {
                os: Some(OperatingSystem::Linux),
                ..QueryCriteria::default()
            },
            QueryCriteria {
                cpu: Some(CpuVendor::Amd),
                ..QueryCriteria::default()
            },
        ];

        let engine = QueryEngine::new(&mut store);
        let result = engine.search_any(Some(&list));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id(), result[1].id());
    }

    #[test]
    fn test_delete_shrinks_store_by_match_count() {
        let mut store = seeded_store();
        let size_before = store.len();

        let c = QueryCriteria {
            cores: Some(12),
            ..QueryCriteria::default()
        };
        let mut engine = QueryEngine::new(&mut store);
        let removed = engine.delete(Some(&c));

        assert_eq!(size_before - store.len(), removed.len());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_none_leaves_store_untouched() {
        let mut store = seeded_store();
        let mut engine = QueryEngine::new(&mut store);

        assert!(engine.delete(None).is_empty());
        assert!(engine.delete(Some(&QueryCriteria::default())).is_empty());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_any_claims_each_asset_once() {
        let mut store = seeded_store();

        // Overlapping criteria: everything has 12 cores and 32 GB
        let list = vec![
            QueryCriteria {
                cores: Some(12),
                ..QueryCriteria::default()
            },
            QueryCriteria {
                memory_gb: Some(32),
                ..QueryCriteria::default()
            },
        ];

        let mut engine = QueryEngine::new(&mut store);
        let removed = engine.delete_any(Some(&list));

        assert_eq!(removed.len(), 3);
        assert!(store.is_empty());
    }

    #[test]
    fn test_whole_store_aggregates_ignore_empty_criteria_policy() {
        let mut store = seeded_store();
        let engine = QueryEngine::new(&mut store);

        assert_eq!(engine.total_cores(), 36);
        assert_eq!(engine.total_memory(), 96);
        // ...while the same sums through an empty criteria are zero
        assert_eq!(engine.total_cores_where(Some(&QueryCriteria::default())), 0);
        assert_eq!(engine.total_memory_where(Some(&QueryCriteria::default())), 0);
    }

    #[test]
    fn test_extremes_on_empty_store_are_zero() {
        let mut store = AssetStore::new();
        let engine = QueryEngine::new(&mut store);

        assert_eq!(engine.max_memory(), 0);
        assert_eq!(engine.max_cores(), 0);
        assert_eq!(engine.min_memory(), 0);
        assert_eq!(engine.min_cores(), 0);
    }

    #[test]
    fn test_min_any_seed_and_absent_override() {
        let mut store = seeded_store();
        let engine = QueryEngine::new(&mut store);

        // Empty list: the seed survives
        assert_eq!(engine.min_cores_any(Some(&[])), u32::MAX);
        // Absent list: explicit zero override
        assert_eq!(engine.min_cores_any(None), 0);
    }

    #[test]
    fn test_min_any_non_matching_criterion_drags_to_zero() {
        let mut store = seeded_store();
        let engine = QueryEngine::new(&mut store);

        let list = vec![
            QueryCriteria {
                cores: Some(12),
                ..QueryCriteria::default()
            },
            QueryCriteria {
                cores: Some(999),
                ..QueryCriteria::default()
            },
        ];

        // The non-matching criterion contributes its 0 floor
        assert_eq!(engine.min_memory_any(Some(&list)), 0);
    }

    #[test]
    fn test_totals_any_double_count_overlap() {
        let mut store = AssetStore::new();
        store.insert(make_asset(OperatingSystem::Linux, CpuVendor::Amd, 8, 16));

        let list = vec![
            QueryCriteria {
                os: Some(OperatingSystem::Linux),
                ..QueryCriteria::default()
            },
            QueryCriteria {
                cpu: Some(CpuVendor::Amd),
                ..QueryCriteria::default()
            },
        ];

        let engine = QueryEngine::new(&mut store);
        assert_eq!(engine.total_assets_any(Some(&list)), 2);
        assert_eq!(engine.total_cores_any(Some(&list)), 16);
        assert_eq!(engine.total_memory_any(Some(&list)), 32);
    }
}
