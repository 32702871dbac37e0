//! Sparse filter specification over asset attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::asset::{CpuVendor, OperatingSystem};

/// A sparse, immutable filter over asset attributes
///
/// Each field is independently optional; `None` means "don't constrain
/// on this attribute". Build criteria with a struct literal:
///
/// ```
/// use fleetdb::asset::OperatingSystem;
/// use fleetdb::query::QueryCriteria;
///
/// let linux_32gb = QueryCriteria {
///     os: Some(OperatingSystem::Linux),
///     memory_gb: Some(32),
///     ..QueryCriteria::default()
/// };
/// assert!(!linux_32gb.is_empty());
/// ```
///
/// A criteria with no fields set is *empty* and matches no assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCriteria {
    /// Required operating system, if constrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OperatingSystem>,

    /// Required CPU vendor, if constrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<CpuVendor>,

    /// Required exact core count, if constrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,

    /// Required exact memory size in gigabytes, if constrained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_gb: Option<u32>,
}

impl QueryCriteria {
    /// Creates an empty criteria (no constraints)
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.os.is_none()
            && self.cpu.is_none()
            && self.cores.is_none()
            && self.memory_gb.is_none()
    }
}

impl fmt::Display for QueryCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "criteria{{")?;
        let mut sep = "";
        if let Some(os) = self.os {
            write!(f, "{}os={}", sep, os)?;
            sep = " ";
        }
        if let Some(cpu) = self.cpu {
            write!(f, "{}cpu={}", sep, cpu)?;
            sep = " ";
        }
        if let Some(cores) = self.cores {
            write!(f, "{}cores={}", sep, cores)?;
            sep = " ";
        }
        if let Some(memory_gb) = self.memory_gb {
            write!(f, "{}memory_gb={}", sep, memory_gb)?;
        }
        write!(f, "}}")
    }
}
