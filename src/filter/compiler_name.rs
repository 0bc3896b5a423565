//! Rules on host and device compiler names.

use super::types::RowFilter;
use crate::catalog::names::{CLANG, DEVICE_COMPILER, GCC, HOST_COMPILER, NVCC};
use crate::catalog::{NameOp, Row};

/// Host/device compiler name compatibility.
///
/// - `nvcc` is never a host compiler.
/// - Host and device compiler must be the same, unless the device compiler
///   is `nvcc`.
/// - `nvcc` only accepts `gcc` or `clang` as host compiler.
pub fn general_compiler_filter(row: &Row<'_>) -> bool {
    if row.check_name(HOST_COMPILER, NameOp::Eq, NVCC) {
        return false;
    }

    if let (Some(host), Some(device)) = (row.name(HOST_COMPILER), row.name(DEVICE_COMPILER)) {
        if device != NVCC && host != device {
            return false;
        }
    }

    if row.check_name(DEVICE_COMPILER, NameOp::Eq, NVCC)
        && row.contains(HOST_COMPILER)
        && !(row.check_name(HOST_COMPILER, NameOp::Eq, GCC)
            || row.check_name(HOST_COMPILER, NameOp::Eq, CLANG))
    {
        return false;
    }

    true
}

/// [`RowFilter`] wrapper of [`general_compiler_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralCompilerFilter;

impl RowFilter for GeneralCompilerFilter {
    fn name(&self) -> &str {
        "general-compiler"
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        general_compiler_filter(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::{CLANG_CUDA, HIPCC, UBUNTU};
    use crate::catalog::{Catalog, CatalogValue, Value};
    use crate::filter::testing::RowFixture;

    fn check(host: Option<(&str, &str)>, device: Option<(&str, &str)>) -> bool {
        let fx = RowFixture::new()
            .maybe(HOST_COMPILER, host)
            .maybe(DEVICE_COMPILER, device);
        fx.eval(general_compiler_filter)
    }

    #[test]
    fn test_nvcc_never_host() {
        assert!(!check(Some((NVCC, "11.0")), None));
        assert!(!check(Some((NVCC, "11.0")), Some((NVCC, "11.0"))));
    }

    #[test]
    fn test_same_compiler_required() {
        assert!(check(Some((GCC, "9")), Some((GCC, "9"))));
        assert!(check(Some((CLANG, "12")), Some((CLANG, "12"))));
        assert!(!check(Some((GCC, "9")), Some((CLANG, "12"))));
        assert!(!check(Some((CLANG, "12")), Some((CLANG_CUDA, "12"))));
        assert!(!check(Some((GCC, "9")), Some((HIPCC, "4.2"))));
    }

    #[test]
    fn test_nvcc_host_whitelist() {
        assert!(check(Some((GCC, "9")), Some((NVCC, "11.0"))));
        assert!(check(Some((CLANG, "10")), Some((NVCC, "11.0"))));
        assert!(!check(Some((HIPCC, "4.2")), Some((NVCC, "11.0"))));
        assert!(!check(Some((CLANG_CUDA, "12")), Some((NVCC, "11.0"))));
    }

    #[test]
    fn test_absent_columns_unconstrained() {
        assert!(check(None, Some((NVCC, "11.0"))));
        assert!(check(Some((GCC, "9")), None));
        assert!(check(None, None));
    }

    #[test]
    fn test_ignores_unrelated_columns() {
        let catalog = Catalog::new().with_scalars(UBUNTU, [Value::new(UBUNTU, "20.04")]);
        let index = catalog.index();
        let ubuntu = CatalogValue::from(Value::new(UBUNTU, "20.04"));
        let cells = [Some(&ubuntu)];
        assert!(general_compiler_filter(&Row::new(&index, &cells)));
    }
}
