//! # Asset Errors
//!
//! Error types for asset construction. Validation runs before an asset
//! exists, so these are the only hard failures in the crate; lookups for
//! unknown ids are modeled as `Option`, never as an error.

use thiserror::Error;

/// Result type for asset construction
pub type AssetResult<T> = Result<T, AssetError>;

/// Asset construction validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AssetError {
    /// Core count must be strictly positive
    #[error("asset requires a positive core count")]
    ZeroCores,

    /// Memory size must be strictly positive
    #[error("asset requires a positive memory size")]
    ZeroMemory,
}
