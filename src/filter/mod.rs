//! Row filters and the staged filter chain.
//!
//! A filter decides whether a (possibly partial) candidate row is still
//! admissible. [`FilterChain`] composes filters in a fixed order of
//! [`Stage`]s with short-circuit AND:
//!
//! ```text
//! Pre → GeneralCompiler → AfterGeneralCompiler → CompilerVersion →
//! AfterCompilerVersion → CompilerBackend → AfterCompilerBackend →
//! SoftwareDependency → Post
//! ```
//!
//! The four non-hook stages hold the built-in toolchain rules
//! ([`general_compiler_filter`], [`compiler_version_filter`],
//! [`compiler_backend_filter`], [`software_dependency_filter`]); callers
//! insert their own rules at the hook stages.

mod backend;
mod chain;
mod compiler_name;
mod compiler_version;
mod software;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{compiler_backend_filter, CompilerBackendFilter};
pub use chain::{FilterChain, Stage};
pub use compiler_name::{general_compiler_filter, GeneralCompilerFilter};
pub use compiler_version::{
    compiler_version_filter, CompilerVersionFilter, NVCC_MAX_CLANG, NVCC_MAX_GCC,
    NVCC_MIN_GCC, NVCC_MIN_GCC_SINCE,
};
pub use software::{software_dependency_filter, SoftwareDependencyFilter};
pub use types::{filter_fn, FnFilter, RowFilter};
