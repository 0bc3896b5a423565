//! Reference project profile.
//!
//! Ready-made inputs for a GPU-portable C++ framework's CI: the software
//! version set, the catalog built from it, a framework/Boost post-filter,
//! the standard pins and the expectation table the final matrix is
//! verified against.

mod catalog;
mod pins;
mod rules;
mod versions;

pub use catalog::{backend_matrix, compiler_values, reference_catalog};
pub use pins::{pin_template, standard_expectations, standard_pins};
pub use rules::{framework_boost_filter, reference_chain, FrameworkBoostFilter};
pub use versions::SoftwareVersions;
