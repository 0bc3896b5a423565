//! Coverage generator trait and result types.

use std::fmt;

use crate::catalog::{Catalog, CatalogValue};
use crate::error::Result;
use crate::filter::RowFilter;

/// A fully populated output row, one value per catalog column.
pub type CoverageRow = Vec<CatalogValue>;

/// A sub-combination that passes the filter on its own but has no valid
/// completion to a full row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncoverableTuple {
    /// `(parameter, value)` cells in column order.
    pub cells: Vec<(String, CatalogValue)>,
}

impl fmt::Display for UncoverableTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (param, value)) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}={value}")?;
        }
        Ok(())
    }
}

/// Output of a coverage run.
#[derive(Debug, Clone, Default)]
pub struct CoverageResult {
    /// Generated rows; every one passes the filter.
    pub rows: Vec<CoverageRow>,
    /// Required tuples no valid row can contain.
    pub uncoverable: Vec<UncoverableTuple>,
    /// Strength actually used, after clamping to the column count.
    pub strength: usize,
    /// Number of tuples the filter accepts in isolation.
    pub required_tuples: usize,
    /// Number of tuples the filter rejects in isolation.
    pub excluded_tuples: usize,
}

impl CoverageResult {
    /// Result for a catalog that admits no rows.
    pub fn empty(strength: usize) -> Self {
        Self {
            strength,
            ..Self::default()
        }
    }

    /// Number of required tuples some row covers.
    pub fn covered_tuples(&self) -> usize {
        self.required_tuples - self.uncoverable.len()
    }
}

/// Turns a catalog, a strength and a filter into covering rows.
///
/// Implementations must guarantee:
///
/// - every output row passes `filter`;
/// - for every `strength`-subset of columns, every value combination the
///   filter accepts on a row holding only those columns appears in some
///   output row, unless no valid full row contains it, in which case it is
///   listed in [`CoverageResult::uncoverable`].
///
/// The filter is treated as a black box and may be called on any partial
/// row.
pub trait CoverageGenerator {
    /// Generates covering rows. A `strength` below 2 is a configuration
    /// error; a strength above the column count is clamped.
    fn generate(
        &self,
        catalog: &Catalog,
        strength: usize,
        filter: &dyn RowFilter,
    ) -> Result<CoverageResult>;
}
