//! Fixed attribute enumerations shared by assets and query criteria.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system installed on an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
}

impl OperatingSystem {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "macos",
            OperatingSystem::Linux => "linux",
        }
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU vendor of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuVendor {
    Amd,
    AppleSilicon,
    Intel,
}

impl CpuVendor {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CpuVendor::Amd => "amd",
            CpuVendor::AppleSilicon => "apple_silicon",
            CpuVendor::Intel => "intel",
        }
    }
}

impl fmt::Display for CpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_form() {
        let os: String = serde_json::to_string(&OperatingSystem::MacOs).unwrap();
        assert_eq!(os, format!("\"{}\"", OperatingSystem::MacOs));

        let cpu: String = serde_json::to_string(&CpuVendor::AppleSilicon).unwrap();
        assert_eq!(cpu, format!("\"{}\"", CpuVendor::AppleSilicon));
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(CpuVendor::Intel, CpuVendor::Intel);
        assert_ne!(CpuVendor::Intel, CpuVendor::Amd);
        assert_ne!(OperatingSystem::Linux, OperatingSystem::Windows);
    }
}
