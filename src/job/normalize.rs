//! Row → job conversion.

use super::types::Job;
use crate::catalog::{Catalog, CatalogValue};

/// Converts a full row into a [`Job`].
///
/// Each scalar cell is stored under its parameter name. A backend set cell
/// is expanded: every backend becomes its own attribute, keyed by the
/// backend name. Cells past the catalog width are ignored.
pub fn normalize(row: &[CatalogValue], catalog: &Catalog) -> Job {
    let mut job = Job::new();
    for (key, cell) in catalog.keys().zip(row) {
        match cell {
            CatalogValue::Scalar(value) => {
                job.insert(key, value.clone());
            }
            CatalogValue::BackendSet(backends) => {
                for backend in backends {
                    job.insert(backend.name(), backend.clone());
                }
            }
        }
    }
    job
}

/// [`normalize`] over every row, preserving order.
pub fn normalize_rows<R: AsRef<[CatalogValue]>>(rows: &[R], catalog: &Catalog) -> Vec<Job> {
    rows.iter().map(|r| normalize(r.as_ref(), catalog)).collect()
}
