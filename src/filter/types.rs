//! Core trait for row filters.

use crate::catalog::Row;

/// A predicate over a (possibly partial) candidate row.
///
/// `accept` returns `true` when the row is still admissible. Rejection is
/// routine pruning, never an error. Implementations must treat unassigned
/// columns as unconstrained: the coverage generator calls filters on rows
/// where only a few columns are populated.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::{CmpOp, Row};
/// use u_jobmatrix::filter::RowFilter;
///
/// struct NoOldBoost;
///
/// impl RowFilter for NoOldBoost {
///     fn name(&self) -> &str { "no-old-boost" }
///     fn accept(&self, row: &Row<'_>) -> bool {
///         !row.check_version("boost", CmpOp::Lt, "1.74.0")
///     }
/// }
/// ```
pub trait RowFilter: Send + Sync {
    /// Returns the name of this filter, used in logs and chain listings.
    fn name(&self) -> &str;

    /// Whether the row is admissible.
    fn accept(&self, row: &Row<'_>) -> bool;
}

/// A named closure filter. Created with [`filter_fn`].
pub struct FnFilter<F> {
    name: String,
    predicate: F,
}

impl<F> RowFilter for FnFilter<F>
where
    F: Fn(&Row<'_>) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        (self.predicate)(row)
    }
}

/// Wraps a closure as a [`RowFilter`].
pub fn filter_fn<F>(name: impl Into<String>, predicate: F) -> FnFilter<F>
where
    F: Fn(&Row<'_>) -> bool + Send + Sync,
{
    FnFilter {
        name: name.into(),
        predicate,
    }
}

impl<T: RowFilter + ?Sized> RowFilter for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        (**self).accept(row)
    }
}
