//! Completeness verification of a finished job list.
//!
//! An [`Expectations`] table lists facts per field, either a bare name
//! (any version) or a name at specific versions. [`verify`] reports every
//! fact that no job witnesses.

mod check;
mod types;

pub use check::verify;
pub use types::{Expected, Expectations, MissingFact, VerifyReport};
