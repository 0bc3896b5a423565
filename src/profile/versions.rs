//! Per-software version lists.

use std::collections::BTreeMap;

use crate::catalog::names::{
    ALPAKA, BOOST, CLANG, CLANG_CUDA, CMAKE, CXX_STANDARD, DEVELOP, GCC, HIPCC, NVCC, UBUNTU,
};
use crate::error::{MatrixError, Result};

/// Ordered version lists, oldest first, keyed by software name.
///
/// The last entry is the latest. For the framework the last entry is the
/// rolling [`DEVELOP`] tag, so its latest *release* is the second-to-last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoftwareVersions {
    versions: BTreeMap<String, Vec<String>>,
}

impl SoftwareVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The version set the built-in rules were written against.
    pub fn reference() -> Self {
        Self::new()
            .with(GCC, ["6", "7", "8", "9", "10", "11"])
            .with(CLANG, ["9", "10", "11", "12", "13"])
            .with(NVCC, ["10.2", "11.0", "11.2", "11.4", "11.6"])
            .with(CLANG_CUDA, ["12", "13"])
            .with(HIPCC, ["4.2", "4.3", "4.5"])
            .with(CMAKE, ["3.18", "3.19", "3.20", "3.21", "3.22"])
            .with(BOOST, ["1.73.0", "1.74.0", "1.75.0", "1.76.0", "1.77.0", "1.78.0"])
            .with(ALPAKA, ["0.8.0", "0.9.0", DEVELOP])
            .with(UBUNTU, ["18.04", "20.04"])
            .with(CXX_STANDARD, ["17", "20"])
    }

    /// Sets the version list of `name`.
    pub fn with<I, S>(mut self, name: &str, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions
            .insert(name.to_string(), versions.into_iter().map(Into::into).collect());
        self
    }

    /// Versions of `name`; empty if unknown.
    pub fn get(&self, name: &str) -> &[String] {
        self.versions.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.versions.keys().map(String::as_str)
    }

    pub fn latest(&self, name: &str) -> Result<&str> {
        self.nth_from_end(name, 1)
    }

    /// Second-to-last entry of `name`.
    pub fn latest_release(&self, name: &str) -> Result<&str> {
        self.nth_from_end(name, 2)
    }

    fn nth_from_end(&self, name: &str, n: usize) -> Result<&str> {
        let list = self.get(name);
        list.len()
            .checked_sub(n)
            .map(|i| list[i].as_str())
            .ok_or_else(|| {
                MatrixError::InvalidConfig(format!(
                    "software '{name}' needs at least {n} version(s), has {}",
                    list.len()
                ))
            })
    }
}
