//! Catalog construction from a version set.

use super::versions::SoftwareVersions;
use crate::catalog::names::*;
use crate::catalog::{Catalog, CatalogValue, Value};

/// Every `(compiler, version)` pair, in [`COMPILERS`] order.
pub fn compiler_values(versions: &SoftwareVersions) -> Vec<Value> {
    COMPILERS
        .iter()
        .flat_map(|&c| versions.get(c).iter().map(move |v| Value::new(c, v.as_str())))
        .collect()
}

fn backend_set(state: impl Fn(&str) -> String) -> CatalogValue {
    CatalogValue::backend_set(ALL_BACKENDS.iter().map(|&b| (b, state(b))))
}

/// Backend set candidates.
///
/// - all CPU backends on, GPU backends off;
/// - per CUDA SDK (the `nvcc` versions): CUDA at that version, serial CPU
///   backend on, everything else off;
/// - per ROCm release (the `hipcc` versions): likewise for HIP.
pub fn backend_matrix(versions: &SoftwareVersions) -> Vec<CatalogValue> {
    let mut sets = vec![backend_set(|b| {
        let state = if CPU_BACKENDS.iter().any(|&c| c == b) { ON } else { OFF };
        state.to_string()
    })];

    for (gpu, sdk) in [(ACC_GPU_CUDA, NVCC), (ACC_GPU_HIP, HIPCC)] {
        for version in versions.get(sdk) {
            sets.push(backend_set(|b| match b {
                _ if b == gpu => version.clone(),
                ACC_CPU_B_SEQ_T_SEQ => ON.to_string(),
                _ => OFF.to_string(),
            }));
        }
    }
    sets
}

fn column(versions: &SoftwareVersions, name: &str) -> Vec<Value> {
    versions
        .get(name)
        .iter()
        .map(|v| Value::new(name, v.as_str()))
        .collect()
}

/// The full project catalog: compilers, backends, build tools, framework,
/// OS and language standard, in that column order.
pub fn reference_catalog(versions: &SoftwareVersions) -> Catalog {
    [CMAKE, BOOST, ALPAKA, UBUNTU, CXX_STANDARD].iter().fold(
        Catalog::new()
            .with_scalars(HOST_COMPILER, compiler_values(versions))
            .with_scalars(DEVICE_COMPILER, compiler_values(versions))
            .with_parameter(BACKENDS, backend_matrix(versions)),
        |catalog, &name| catalog.with_scalars(name, column(versions, name)),
    )
}
