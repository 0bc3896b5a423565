//! Ordered filter pipeline with hook stages.

use super::backend::CompilerBackendFilter;
use super::compiler_name::GeneralCompilerFilter;
use super::compiler_version::CompilerVersionFilter;
use super::software::SoftwareDependencyFilter;
use super::types::RowFilter;
use crate::catalog::Row;

/// Position of a filter in the pipeline.
///
/// Stages are evaluated in declaration order. The four rule stages hold the
/// built-in compatibility rules; the others are extension points for
/// caller filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Runs first.
    Pre,
    /// Built-in host/device compiler name rules.
    GeneralCompiler,
    /// Hook A.
    AfterGeneralCompiler,
    /// Built-in compiler version rules.
    CompilerVersion,
    /// Hook B.
    AfterCompilerVersion,
    /// Built-in device compiler / backend rules.
    CompilerBackend,
    /// Hook C.
    AfterCompilerBackend,
    /// Built-in OS, language standard and SDK rules.
    SoftwareDependency,
    /// Runs last.
    Post,
}

impl Stage {
    /// All stages in evaluation order.
    pub const ALL: [Stage; 9] = [
        Stage::Pre,
        Stage::GeneralCompiler,
        Stage::AfterGeneralCompiler,
        Stage::CompilerVersion,
        Stage::AfterCompilerVersion,
        Stage::CompilerBackend,
        Stage::AfterCompilerBackend,
        Stage::SoftwareDependency,
        Stage::Post,
    ];

    /// Whether this stage is a caller extension point.
    pub fn is_hook(self) -> bool {
        !matches!(
            self,
            Stage::GeneralCompiler
                | Stage::CompilerVersion
                | Stage::CompilerBackend
                | Stage::SoftwareDependency
        )
    }
}

/// An ordered, short-circuiting conjunction of filters.
///
/// Filters are kept sorted by [`Stage`]; filters added to the same stage run
/// in insertion order.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::{CmpOp, Row};
/// use u_jobmatrix::filter::{filter_fn, FilterChain, Stage};
///
/// let chain = FilterChain::standard()
///     .with_filter(Stage::Post, filter_fn("no-cmake-3.18", |row: &Row<'_>| {
///         !row.check_version("cmake", CmpOp::Eq, "3.18")
///     }));
///
/// assert_eq!(chain.len(), 5);
/// assert_eq!(chain.filter_names().last(), Some(&"no-cmake-3.18"));
/// ```
#[derive(Default)]
pub struct FilterChain {
    entries: Vec<(Stage, Box<dyn RowFilter>)>,
}

impl FilterChain {
    /// An empty chain that accepts every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in rule families in their stages.
    pub fn standard() -> Self {
        Self::new()
            .with_filter(Stage::GeneralCompiler, GeneralCompilerFilter)
            .with_filter(Stage::CompilerVersion, CompilerVersionFilter)
            .with_filter(Stage::CompilerBackend, CompilerBackendFilter)
            .with_filter(Stage::SoftwareDependency, SoftwareDependencyFilter)
    }

    /// Adds a filter at `stage`, after any filters already in that stage.
    pub fn add<F: RowFilter + 'static>(&mut self, stage: Stage, filter: F) {
        let at = self.entries.partition_point(|(s, _)| *s <= stage);
        self.entries.insert(at, (stage, Box::new(filter)));
    }

    /// Builder form of [`add`](Self::add).
    pub fn with_filter<F: RowFilter + 'static>(mut self, stage: Stage, filter: F) -> Self {
        self.add(stage, filter);
        self
    }

    /// Number of filters in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filter names in evaluation order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, f)| f.name()).collect()
    }

    /// Stages of the filters, in evaluation order.
    pub fn stages(&self) -> Vec<Stage> {
        self.entries.iter().map(|(s, _)| *s).collect()
    }

    /// Name of the first filter rejecting `row`, or `None` if it passes.
    pub fn first_rejection(&self, row: &Row<'_>) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, f)| !f.accept(row))
            .map(|(_, f)| f.name())
    }
}

impl RowFilter for FilterChain {
    fn name(&self) -> &str {
        "filter-chain"
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        self.entries.iter().all(|(_, f)| f.accept(row))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(s, flt)| (s, flt.name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::names::*;
    use crate::catalog::{Catalog, CatalogValue, Value};
    use crate::filter::filter_fn;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_standard_order() {
        let chain = FilterChain::standard();
        assert_eq!(
            chain.filter_names(),
            vec![
                "general-compiler",
                "compiler-version",
                "compiler-backend",
                "software-dependency"
            ]
        );
    }

    #[test]
    fn test_hooks_interleave() {
        let chain = FilterChain::standard()
            .with_filter(Stage::Post, filter_fn("post", |_: &Row<'_>| true))
            .with_filter(Stage::Pre, filter_fn("pre", |_: &Row<'_>| true))
            .with_filter(Stage::AfterCompilerBackend, filter_fn("c", |_: &Row<'_>| true))
            .with_filter(Stage::AfterGeneralCompiler, filter_fn("a", |_: &Row<'_>| true))
            .with_filter(Stage::AfterCompilerVersion, filter_fn("b", |_: &Row<'_>| true))
            .with_filter(Stage::Post, filter_fn("post2", |_: &Row<'_>| true));

        assert_eq!(
            chain.filter_names(),
            vec![
                "pre",
                "general-compiler",
                "a",
                "compiler-version",
                "b",
                "compiler-backend",
                "c",
                "software-dependency",
                "post",
                "post2"
            ]
        );
    }

    #[test]
    fn test_stage_hooks() {
        let hooks: Vec<Stage> = Stage::ALL.into_iter().filter(|s| s.is_hook()).collect();
        assert_eq!(hooks.len(), 5);
        assert!(!Stage::SoftwareDependency.is_hook());
    }

    #[test]
    fn test_empty_chain_accepts() {
        let catalog = Catalog::new().with_scalars(HOST_COMPILER, [Value::new(NVCC, "11.0")]);
        let index = catalog.index();
        let nvcc = CatalogValue::from(Value::new(NVCC, "11.0"));
        let cells = [Some(&nvcc)];
        let row = Row::new(&index, &cells);

        assert!(FilterChain::new().accept(&row));
        assert!(!FilterChain::standard().accept(&row));
        assert_eq!(
            FilterChain::standard().first_rejection(&row),
            Some("general-compiler")
        );
    }

    #[test]
    fn test_short_circuit() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let chain = FilterChain::new()
            .with_filter(Stage::Pre, filter_fn("reject-all", |_: &Row<'_>| false))
            .with_filter(
                Stage::Post,
                filter_fn("count", move |_: &Row<'_>| {
                    counter.fetch_add(1, Ordering::Relaxed);
                    true
                }),
            );

        let index = Catalog::new().index();
        let row = Row::new(&index, &[]);
        assert!(!chain.accept(&row));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }
}
