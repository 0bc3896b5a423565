//! Parameter catalog, column index and row view.
//!
//! A [`Catalog`] is the caller's ordered list of parameters and their
//! candidate [`CatalogValue`]s. [`ParamIndex`] maps parameter names to the
//! column positions of one run, and [`Row`] is the view filters receive:
//! a partial row plus the index it must be read with.
//!
//! Version strings are compared with release ordering, see [`VersionKey`].

mod row;
mod types;
mod version;

pub mod names;

pub use row::Row;
pub use types::{Catalog, CatalogValue, ParamIndex, Value};
pub use version::{compare_versions, CmpOp, NameOp, VersionKey};
