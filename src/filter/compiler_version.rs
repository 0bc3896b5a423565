//! Rules on host and device compiler versions.

use super::types::RowFilter;
use crate::catalog::names::{CLANG, DEVICE_COMPILER, GCC, HOST_COMPILER, NVCC};
use crate::catalog::{Row, VersionKey};

/// `(minimum CUDA SDK, maximum gcc)` pairs, newest SDK first.
pub const NVCC_MAX_GCC: [(&str, &str); 5] = [
    ("11.6", "11"),
    ("11.4", "10"),
    ("11.0", "9"),
    ("10.2", "8"),
    ("10.0", "7"),
];

/// `(minimum CUDA SDK, maximum clang)` pairs, newest SDK first.
pub const NVCC_MAX_CLANG: [(&str, &str); 7] = [
    ("11.6", "13"),
    ("11.4", "12"),
    ("11.1", "10"),
    ("11.0", "9"),
    ("10.1", "8"),
    ("10.0", "6"),
    ("9.2", "5"),
];

/// From this CUDA SDK on, gcc must be at least [`NVCC_MIN_GCC`].
pub const NVCC_MIN_GCC_SINCE: &str = "11.4";
pub const NVCC_MIN_GCC: &str = "6";

/// Looks up the first table entry whose SDK threshold `sdk` meets and
/// checks `host` against its maximum. SDKs older than every threshold are
/// unconstrained.
fn within_host_limit(table: &[(&str, &str)], sdk: &VersionKey, host: &VersionKey) -> bool {
    table
        .iter()
        .find(|(min_sdk, _)| *sdk >= VersionKey::parse(min_sdk))
        .map_or(true, |(_, max_host)| *host <= VersionKey::parse(max_host))
}

/// Host/device compiler version compatibility.
///
/// - The same compiler for host and device (anything but `nvcc` on the
///   device side) must be the same version.
/// - `nvcc` caps the host compiler version per CUDA SDK, see
///   [`NVCC_MAX_GCC`] and [`NVCC_MAX_CLANG`].
pub fn compiler_version_filter(row: &Row<'_>) -> bool {
    let (Some(host), Some(device)) = (row.value(HOST_COMPILER), row.value(DEVICE_COMPILER)) else {
        return true;
    };

    if device.name() != NVCC {
        return host.version() == device.version();
    }

    let sdk = VersionKey::parse(device.version());
    let host_version = VersionKey::parse(host.version());
    match host.name() {
        GCC => {
            if !within_host_limit(&NVCC_MAX_GCC, &sdk, &host_version) {
                return false;
            }
            if sdk >= VersionKey::parse(NVCC_MIN_GCC_SINCE)
                && host_version < VersionKey::parse(NVCC_MIN_GCC)
            {
                return false;
            }
            true
        }
        CLANG => within_host_limit(&NVCC_MAX_CLANG, &sdk, &host_version),
        _ => true,
    }
}

/// [`RowFilter`] wrapper of [`compiler_version_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CompilerVersionFilter;

impl RowFilter for CompilerVersionFilter {
    fn name(&self) -> &str {
        "compiler-version"
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        compiler_version_filter(row)
    }
}
