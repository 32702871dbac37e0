//! Criteria matching for query evaluation
//!
//! Matches assets strictly against a criteria's present fields.
//! No coercion, no ranges, exact equality only.

use crate::asset::Asset;

use super::criteria::QueryCriteria;

/// Evaluates criteria against assets
pub struct CriteriaFilter;

impl CriteriaFilter {
    /// Checks if an asset matches a criteria.
    ///
    /// The check is a single composed predicate: every present field must
    /// be exactly equal on the asset (AND semantics); absent fields impose
    /// no constraint. An empty criteria matches nothing.
    pub fn matches(criteria: &QueryCriteria, asset: &Asset) -> bool {
        if criteria.is_empty() {
            return false;
        }

        criteria.os.map_or(true, |os| asset.os() == os)
            && criteria.cpu.map_or(true, |cpu| asset.cpu() == cpu)
            && criteria.cores.map_or(true, |cores| asset.cores() == cores)
            && criteria
                .memory_gb
                .map_or(true, |memory_gb| asset.memory_gb() == memory_gb)
    }
}
