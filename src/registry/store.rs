//! In-memory id → asset map with CRUD primitives.

use std::collections::HashMap;

use crate::asset::{Asset, AssetId};

/// Owned mapping from asset id to asset record
///
/// The query engine borrows a store and full-scans `entries`; everything
/// else reaches an asset only through its id.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: HashMap<AssetId, Asset>,
}

impl AssetStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an asset keyed by its own id and returns the id.
    ///
    /// Reinserting an asset with an id already present overwrites the
    /// existing entry.
    pub fn insert(&mut self, asset: Asset) -> AssetId {
        let id = asset.id();
        self.assets.insert(id, asset);
        id
    }

    /// Stores each asset in order; returned ids preserve input order.
    pub fn insert_all(&mut self, assets: Vec<Asset>) -> Vec<AssetId> {
        assets.into_iter().map(|a| self.insert(a)).collect()
    }

    /// Looks up an asset by id. No side effect.
    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.get(id)
    }

    /// Removes and returns the asset with the given id, if present.
    pub fn remove(&mut self, id: &AssetId) -> Option<Asset> {
        self.assets.remove(id)
    }

    /// Removes each listed id in order, collecting the assets that were
    /// actually present. Unknown ids are silently skipped.
    pub fn remove_all(&mut self, ids: &[AssetId]) -> Vec<Asset> {
        ids.iter().filter_map(|id| self.remove(id)).collect()
    }

    /// Full-scan iterator over (id, asset) entries.
    ///
    /// Iteration order is the map's internal order; callers must not
    /// attach meaning to it.
    pub fn entries(&self) -> impl Iterator<Item = (&AssetId, &Asset)> {
        self.assets.iter()
    }

    /// Iterator over stored assets.
    pub fn assets(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    /// Number of stored assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the store holds no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
