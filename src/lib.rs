//! Sparse CI job-matrix generation.
//!
//! Computes a reduced, constraint-valid set of build configurations
//! ("jobs") for a CI pipeline that must exercise many compiler, backend and
//! library-version combinations without running the full cross-product:
//!
//! - **Catalog**: ordered parameters and their candidate values, with the
//!   run-scoped column index and the partial-row view filters read.
//! - **Filter**: composable predicates encoding toolchain compatibility,
//!   evaluated in a fixed staged order with caller hooks in between.
//! - **Coverage**: N-wise covering rows under the filter, behind the
//!   [`coverage::CoverageGenerator`] trait.
//! - **Job**: row normalization (backend sets expanded into one attribute
//!   per backend) and the seeded shuffle.
//! - **Reorder**: pinning of required jobs to the front, in call order.
//! - **Wave**: capacity-bounded partitioning into fixed-size waves.
//! - **Verify**: proof that required names and versions survived the
//!   filters.
//! - **Runner**: the whole pipeline behind one configuration.
//! - **Profile**: the reference version set, catalog, pins and
//!   expectations.
//!
//! # Architecture
//!
//! Data flows catalog → filter chain → coverage → normalize → shuffle →
//! pin → waves; the verifier reads the flat job list. Every stage is
//! deterministic: the same catalog, filters and seed give the same
//! matrix. Rendering jobs into a CI document, argument parsing and
//! container naming are left to callers.

pub mod catalog;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod job;
pub mod profile;
pub mod reorder;
pub mod runner;
pub mod verify;
pub mod wave;

pub use error::{MatrixError, Result};
