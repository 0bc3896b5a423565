//! Pipeline configuration and execution.
//!
//! # Usage
//!
//! ```
//! use u_jobmatrix::profile::{
//!     reference_catalog, reference_chain, standard_expectations, standard_pins, SoftwareVersions,
//! };
//! use u_jobmatrix::runner::{GeneratorConfig, MatrixRunner};
//! use u_jobmatrix::verify::verify;
//!
//! let versions = SoftwareVersions::reference();
//! let result = MatrixRunner::run(
//!     &reference_catalog(&versions),
//!     &reference_chain(),
//!     &GeneratorConfig::default(),
//!     &standard_pins(&versions).unwrap(),
//! )
//! .unwrap();
//!
//! assert!(verify(&result.jobs, &standard_expectations(&versions)).is_complete());
//! ```

mod config;
mod pipeline;

pub use config::GeneratorConfig;
pub use pipeline::{MatrixResult, MatrixRunner, MatrixStats};
