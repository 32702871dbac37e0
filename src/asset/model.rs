//! Asset record and id newtype.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{AssetError, AssetResult};
use super::types::{CpuVendor, OperatingSystem};

/// Opaque unique identifier for an asset
///
/// Generated once at construction, never reused, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(Uuid);

impl AssetId {
    /// Generates a fresh id
    pub fn generate() -> Self {
        AssetId(Uuid::new_v4())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inventory record describing one compute resource
///
/// All four descriptive attributes are required. The id is assigned when
/// the asset is built and the record is immutable from then on; the only
/// way out of a registry is explicit deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    id: AssetId,
    os: OperatingSystem,
    cpu: CpuVendor,
    cores: u32,
    memory_gb: u32,
}

impl Asset {
    /// Builds a validated asset, assigning it a fresh id.
    ///
    /// Fails if `cores` or `memory_gb` is zero; a failed construction
    /// never yields a partial record.
    pub fn new(
        os: OperatingSystem,
        cpu: CpuVendor,
        cores: u32,
        memory_gb: u32,
    ) -> AssetResult<Self> {
        if cores == 0 {
            return Err(AssetError::ZeroCores);
        }
        if memory_gb == 0 {
            return Err(AssetError::ZeroMemory);
        }

        Ok(Self {
            id: AssetId::generate(),
            os,
            cpu,
            cores,
            memory_gb,
        })
    }

    /// Returns the asset id
    pub fn id(&self) -> AssetId {
        self.id
    }

    /// Returns the operating system
    pub fn os(&self) -> OperatingSystem {
        self.os
    }

    /// Returns the CPU vendor
    pub fn cpu(&self) -> CpuVendor {
        self.cpu
    }

    /// Returns the core count
    pub fn cores(&self) -> u32 {
        self.cores
    }

    /// Returns the memory size in gigabytes
    pub fn memory_gb(&self) -> u32 {
        self.memory_gb
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "asset {} os={} cpu={} cores={} memory_gb={}",
            self.id, self.os, self.cpu, self.cores, self.memory_gb
        )
    }
}
