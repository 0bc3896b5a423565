//! Deterministic greedy covering-row construction.
//!
//! [`GreedyCoverage`] builds one row at a time:
//!
//! 1. Seed the row with the first uncovered combination.
//! 2. Check the seed has a valid completion (depth-first search with the
//!    filter applied at every partial row). Before each branch every open
//!    column must still have a value the filter accepts, and partial rows
//!    known to be dead are remembered for the rest of the run. If the seed
//!    has no completion, report it as uncoverable and move on.
//! 3. Fill the remaining columns left to right. Each column takes the value
//!    that completes the most uncovered combinations, lowest value index
//!    first on ties, among the values that keep the row completable.
//! 4. Mark everything the finished row contains as covered.
//!
//! Every row covers at least its seed, so the loop terminates. The result
//! depends only on the catalog order and the filter.

use std::cell::RefCell;
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use super::tuples::{TupleState, TupleTable};
use super::types::{CoverageGenerator, CoverageResult, CoverageRow, UncoverableTuple};
use crate::catalog::{Catalog, CatalogValue, ParamIndex, Row};
use crate::error::{MatrixError, Result};
use crate::filter::RowFilter;

/// Greedy row-by-row covering array generator with completion look-ahead.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::{Catalog, Value};
/// use u_jobmatrix::coverage::{CoverageGenerator, GreedyCoverage};
/// use u_jobmatrix::filter::FilterChain;
///
/// fn values(name: &str) -> Vec<Value> {
///     (1..=3).map(|v| Value::new(name, v.to_string())).collect()
/// }
///
/// let catalog = Catalog::new()
///     .with_scalars("a", values("a"))
///     .with_scalars("b", values("b"))
///     .with_scalars("c", values("c"));
///
/// let result = GreedyCoverage::new()
///     .generate(&catalog, 2, &FilterChain::new())
///     .unwrap();
///
/// assert!(result.rows.len() >= 9);
/// assert!(result.uncoverable.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyCoverage {
    parallel: bool,
}

impl GreedyCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores candidate values in parallel. Requires the `parallel`
    /// feature; without it the flag is ignored. Output is identical either
    /// way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl CoverageGenerator for GreedyCoverage {
    fn generate(
        &self,
        catalog: &Catalog,
        strength: usize,
        filter: &dyn RowFilter,
    ) -> Result<CoverageResult> {
        if strength < 2 {
            return Err(MatrixError::InvalidConfig(format!(
                "coverage strength must be at least 2, got {strength}"
            )));
        }

        let t = strength.min(catalog.len());
        let sizes: Vec<usize> = (0..catalog.len()).map(|c| catalog.values(c).len()).collect();
        if sizes.is_empty() || sizes.contains(&0) {
            debug!(columns = sizes.len(), "catalog admits no rows");
            return Ok(CoverageResult::empty(t));
        }

        let search = Search {
            catalog,
            index: catalog.index(),
            filter,
            sizes,
            parallel: self.parallel,
            dead: RefCell::new(HashSet::new()),
        };
        debug!(
            columns = search.sizes.len(),
            strength = t,
            parallel = search.parallel,
            filter = filter.name(),
            "coverage generation started"
        );

        let result = search.run(t);
        info!(
            rows = result.rows.len(),
            required = result.required_tuples,
            excluded = result.excluded_tuples,
            uncoverable = result.uncoverable.len(),
            "coverage generation finished"
        );
        Ok(result)
    }
}

/// State shared by one generation run.
struct Search<'a> {
    catalog: &'a Catalog,
    index: ParamIndex,
    filter: &'a dyn RowFilter,
    sizes: Vec<usize>,
    parallel: bool,
    /// Partial rows with no accepted completion.
    dead: RefCell<HashSet<Vec<Option<usize>>>>,
}

impl Search<'_> {
    fn run(&self, t: usize) -> CoverageResult {
        let mut table = TupleTable::build(&self.sizes, t, |row| self.accepts(row));
        let required_tuples = table.count(TupleState::Uncovered);
        let excluded_tuples = table.count(TupleState::Excluded);

        let mut rows = Vec::new();
        let mut uncoverable = Vec::new();

        while let Some((set, code)) = table.next_uncovered() {
            let mut row = table.seed_row(set, code);
            if !self.completable(&mut row) {
                table.mark(set, code, TupleState::Uncoverable);
                let tuple = self.describe(&table.cells(set, code));
                debug!(tuple = %tuple, "combination has no valid completion");
                uncoverable.push(tuple);
                continue;
            }

            for column in 0..row.len() {
                if row[column].is_none() {
                    self.fill(&table, &mut row, column);
                }
            }

            let Some(full) = self.materialize(&row) else {
                // fill keeps the row completable, so this is unreachable
                table.mark(set, code, TupleState::Uncoverable);
                continue;
            };
            table.cover_row(&row);
            rows.push(full);
        }

        CoverageResult {
            rows,
            uncoverable,
            strength: t,
            required_tuples,
            excluded_tuples,
        }
    }

    fn accepts(&self, row: &[Option<usize>]) -> bool {
        let cells: Vec<Option<&CatalogValue>> = row
            .iter()
            .enumerate()
            .map(|(c, v)| v.map(|v| &self.catalog.values(c)[v]))
            .collect();
        self.filter.accept(&Row::new(&self.index, &cells))
    }

    /// Whether the (accepted) partial row extends to an accepted full row.
    /// Leaves `row` unchanged.
    fn completable(&self, row: &mut [Option<usize>]) -> bool {
        let Some(column) = row.iter().position(Option::is_none) else {
            return true;
        };
        if self.dead.borrow().contains(&row[..]) {
            return false;
        }

        let found = self.viable(row)
            && (0..self.sizes[column]).any(|value| {
                row[column] = Some(value);
                let found = self.accepts(row) && self.completable(row);
                row[column] = None;
                found
            });
        if !found {
            self.dead.borrow_mut().insert(row.to_vec());
        }
        found
    }

    /// Whether every unassigned column has some value the filter accepts
    /// next to the assigned ones. Leaves `row` unchanged.
    fn viable(&self, row: &mut [Option<usize>]) -> bool {
        for column in 0..row.len() {
            if row[column].is_some() {
                continue;
            }
            let mut open = false;
            for value in 0..self.sizes[column] {
                row[column] = Some(value);
                open = self.accepts(row);
                if open {
                    break;
                }
            }
            row[column] = None;
            if !open {
                return false;
            }
        }
        true
    }

    /// Assigns `column` the best value that keeps the row completable.
    fn fill(&self, table: &TupleTable, row: &mut [Option<usize>], column: usize) {
        let mut candidates = self.score(table, row, column);
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        for (value, _) in candidates {
            row[column] = Some(value);
            if self.accepts(row) && self.completable(row) {
                return;
            }
        }
        row[column] = None;
    }

    /// `(value, gain)` for every value of `column`, in value order.
    fn score(
        &self,
        table: &TupleTable,
        row: &[Option<usize>],
        column: usize,
    ) -> Vec<(usize, usize)> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return (0..self.sizes[column])
                .into_par_iter()
                .map(|v| (v, table.gain(row, column, v)))
                .collect();
        }
        (0..self.sizes[column])
            .map(|v| (v, table.gain(row, column, v)))
            .collect()
    }

    fn materialize(&self, row: &[Option<usize>]) -> Option<CoverageRow> {
        row.iter()
            .enumerate()
            .map(|(c, v)| v.map(|v| self.catalog.values(c)[v].clone()))
            .collect()
    }

    fn describe(&self, cells: &[(usize, usize)]) -> UncoverableTuple {
        UncoverableTuple {
            cells: cells
                .iter()
                .map(|&(c, v)| {
                    (
                        self.catalog.key(c).to_string(),
                        self.catalog.values(c)[v].clone(),
                    )
                })
                .collect(),
        }
    }
}
