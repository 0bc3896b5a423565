//! Row fixtures for filter unit tests.

use crate::catalog::names::*;
use crate::catalog::{Catalog, CatalogValue, Row, Value};

/// A row over the reference column layout with chosen cells assigned.
pub(crate) struct RowFixture {
    catalog: Catalog,
    cells: Vec<Option<CatalogValue>>,
}

impl RowFixture {
    pub(crate) fn new() -> Self {
        let keys = [
            HOST_COMPILER,
            DEVICE_COMPILER,
            BACKENDS,
            CMAKE,
            BOOST,
            ALPAKA,
            UBUNTU,
            CXX_STANDARD,
        ];
        let catalog = keys
            .iter()
            .fold(Catalog::new(), |c, k| c.with_parameter(*k, Vec::new()));
        Self {
            catalog,
            cells: vec![None; keys.len()],
        }
    }

    fn put(mut self, param: &str, value: CatalogValue) -> Self {
        let pos = match self.catalog.index().position(param) {
            Some(pos) => pos,
            None => {
                self.catalog.insert(param, Vec::new());
                self.cells.push(None);
                self.cells.len() - 1
            }
        };
        self.cells[pos] = Some(value);
        self
    }

    pub(crate) fn set(self, param: &str, name: &str, version: &str) -> Self {
        self.put(param, Value::new(name, version).into())
    }

    pub(crate) fn maybe(self, param: &str, value: Option<(&str, &str)>) -> Self {
        match value {
            Some((name, version)) => self.set(param, name, version),
            None => self,
        }
    }

    pub(crate) fn backends(self, states: &[(&str, &str)]) -> Self {
        self.put(BACKENDS, CatalogValue::backend_set(states.iter().copied()))
    }

    pub(crate) fn eval(&self, filter: impl Fn(&Row<'_>) -> bool) -> bool {
        let index = self.catalog.index();
        let cells: Vec<Option<&CatalogValue>> = self.cells.iter().map(Option::as_ref).collect();
        filter(&Row::new(&index, &cells))
    }
}
