//! Partial candidate rows and the lookup helpers filters are written with.

use super::names::BACKENDS;
use super::types::{CatalogValue, ParamIndex, Value};
use super::version::{compare_versions, CmpOp, NameOp};

/// A view of a (possibly partial) candidate row.
///
/// Cells are positioned by the run's [`ParamIndex`]; a `None` cell, or a
/// column past the end of `cells`, is unassigned. Every helper treats an
/// unassigned column as "no match" so that a clause mentioning it does not
/// constrain the row.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::{Catalog, CatalogValue, CmpOp, NameOp, Row, Value};
///
/// let catalog = Catalog::new()
///     .with_scalars("host_compiler", [Value::new("gcc", "9")])
///     .with_scalars("ubuntu", [Value::new("ubuntu", "20.04")]);
/// let index = catalog.index();
///
/// let gcc = CatalogValue::from(Value::new("gcc", "9"));
/// let cells = [Some(&gcc)];
/// let row = Row::new(&index, &cells);
///
/// assert!(row.check_name("host_compiler", NameOp::Eq, "gcc"));
/// assert!(row.check_version("host_compiler", CmpOp::Lt, "10"));
/// assert!(!row.contains("ubuntu"));
/// assert!(!row.check_version("ubuntu", CmpOp::Ne, "18.04"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: &'a ParamIndex,
    cells: &'a [Option<&'a CatalogValue>],
}

impl<'a> Row<'a> {
    pub fn new(index: &'a ParamIndex, cells: &'a [Option<&'a CatalogValue>]) -> Self {
        Self { index, cells }
    }

    /// Column count of the underlying catalog view.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Number of assigned cells.
    pub fn assigned(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// The cell of `param`, if the parameter exists and is assigned.
    pub fn cell(&self, param: &str) -> Option<&'a CatalogValue> {
        let pos = self.index.position(param)?;
        self.cells.get(pos).copied().flatten()
    }

    /// Whether `param` is assigned in this row.
    pub fn contains(&self, param: &str) -> bool {
        self.cell(param).is_some()
    }

    /// The scalar value of `param`.
    pub fn value(&self, param: &str) -> Option<&'a Value> {
        self.cell(param).and_then(CatalogValue::as_scalar)
    }

    pub fn name(&self, param: &str) -> Option<&'a str> {
        self.value(param).map(Value::name)
    }

    pub fn version(&self, param: &str) -> Option<&'a str> {
        self.value(param).map(Value::version)
    }

    /// `false` when `param` is unassigned, otherwise the name comparison.
    pub fn check_name(&self, param: &str, op: NameOp, name: &str) -> bool {
        self.name(param).is_some_and(|n| op.apply(n, name))
    }

    /// `false` when `param` is unassigned, otherwise the version comparison.
    pub fn check_version(&self, param: &str, op: CmpOp, version: &str) -> bool {
        self.version(param)
            .is_some_and(|v| compare_versions(v, op, version))
    }

    /// The entry of `backend` inside the `backends` cell.
    pub fn backend(&self, backend: &str) -> Option<&'a Value> {
        self.cell(BACKENDS)
            .and_then(CatalogValue::as_backends)
            .and_then(|set| set.iter().find(|b| b.name() == backend))
    }

    /// `false` when the backend set is unassigned or lacks `backend`,
    /// otherwise the version comparison of that backend's state.
    pub fn check_backend_version(&self, backend: &str, op: CmpOp, version: &str) -> bool {
        self.backend(backend)
            .is_some_and(|b| compare_versions(b.version(), op, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_scalars(HOST_COMPILER, [Value::new(GCC, "9")])
            .with_scalars(DEVICE_COMPILER, [Value::new(NVCC, "11.0")])
            .with_parameter(
                BACKENDS,
                vec![CatalogValue::backend_set([
                    (ACC_GPU_CUDA, "11.0"),
                    (ACC_GPU_HIP, OFF),
                ])],
            )
            .with_scalars(UBUNTU, [Value::new(UBUNTU, "20.04")])
    }

    #[test]
    fn test_prefix_row() {
        let catalog = catalog();
        let index = catalog.index();
        let host = CatalogValue::from(Value::new(GCC, "9"));
        let cells = [Some(&host)];
        let row = Row::new(&index, &cells);

        assert_eq!(row.width(), 1);
        assert!(row.contains(HOST_COMPILER));
        assert!(!row.contains(DEVICE_COMPILER));
        assert!(!row.check_name(DEVICE_COMPILER, NameOp::Eq, NVCC));
        assert!(!row.check_name(DEVICE_COMPILER, NameOp::Ne, NVCC));
    }

    #[test]
    fn test_sparse_row() {
        let catalog = catalog();
        let index = catalog.index();
        let ubuntu = CatalogValue::from(Value::new(UBUNTU, "20.04"));
        let cells = [None, None, None, Some(&ubuntu)];
        let row = Row::new(&index, &cells);

        assert_eq!(row.assigned(), 1);
        assert!(!row.contains(HOST_COMPILER));
        assert!(row.check_version(UBUNTU, CmpOp::Eq, "20.04"));
        assert!(!row.check_version(UBUNTU, CmpOp::Eq, "18.04"));
    }

    #[test]
    fn test_unknown_parameter() {
        let catalog = catalog();
        let index = catalog.index();
        let cells = [None, None, None, None];
        let row = Row::new(&index, &cells);
        assert!(!row.contains("boost"));
        assert!(!row.check_version("boost", CmpOp::Ge, "1.0"));
    }

    #[test]
    fn test_backend_lookup() {
        let catalog = catalog();
        let index = catalog.index();
        let cells: Vec<Option<&CatalogValue>> =
            (0..catalog.len()).map(|c| catalog.values(c).first()).collect();
        let row = Row::new(&index, &cells);

        assert_eq!(row.backend(ACC_GPU_CUDA).unwrap().version(), "11.0");
        assert!(row.check_backend_version(ACC_GPU_CUDA, CmpOp::Eq, "11"));
        assert!(row.check_backend_version(ACC_GPU_HIP, CmpOp::Eq, OFF));
        assert!(!row.check_backend_version(ACC_CPU_B_SEQ_T_SEQ, CmpOp::Ne, OFF));
        // the backend set has no scalar name
        assert!(row.name(BACKENDS).is_none());
    }
}
