//! Normalized jobs, row normalization and the deterministic shuffle.

mod normalize;
mod shuffle;
mod types;

pub use normalize::{normalize, normalize_rows};
pub use shuffle::{shuffle_jobs, DEFAULT_SEED};
pub use types::Job;
