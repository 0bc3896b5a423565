//! N-wise coverage generation.
//!
//! A [`CoverageGenerator`] turns a catalog, a strength `N` and a filter into
//! fully populated rows such that every `N`-column value combination the
//! filter admits appears in at least one row. Combinations the filter
//! accepts in isolation but that no valid full row can hold are reported as
//! [`UncoverableTuple`]s instead.
//!
//! [`GreedyCoverage`] is the shipped implementation: a deterministic
//! row-by-row constructor in the AETG family. Minimality is heuristic.
//!
//! # References
//!
//! - Cohen et al. (1997), "The AETG System: An Approach to Testing Based
//!   on Combinatorial Design"
//! - Czerwonka (2006), "Pairwise Testing in the Real World: Practical
//!   Extensions to Test-Case Scenarios"

mod greedy;
mod tuples;
mod types;

pub use greedy::GreedyCoverage;
pub use types::{CoverageGenerator, CoverageResult, CoverageRow, UncoverableTuple};
