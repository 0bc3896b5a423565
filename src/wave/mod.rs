//! Partitioning of the ordered job list into execution waves.
//!
//! A wave is a contiguous batch of at most `wave_size` jobs. The first
//! `max_jobs` jobs (all of them when `max_jobs` is 0) are split into waves
//! in order; jobs past the cap are dropped, never moved into a later wave.

use tracing::debug;

use crate::error::{MatrixError, Result};

/// Splits `jobs` into consecutive waves of `wave_size`.
///
/// With `max_jobs > 0` only the first `min(max_jobs, jobs.len())` jobs are
/// kept and the last wave is cropped to the remainder.
///
/// # Errors
/// [`MatrixError::InvalidConfig`] if `wave_size` is 0.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::wave::distribute_to_waves;
///
/// let jobs: Vec<u32> = (0..23).collect();
///
/// let waves = distribute_to_waves(jobs.clone(), 10, 0).unwrap();
/// assert_eq!(waves.iter().map(Vec::len).collect::<Vec<_>>(), [10, 10, 3]);
///
/// let waves = distribute_to_waves(jobs, 10, 15).unwrap();
/// assert_eq!(waves.iter().map(Vec::len).collect::<Vec<_>>(), [10, 5]);
/// ```
pub fn distribute_to_waves<T>(
    jobs: Vec<T>,
    wave_size: usize,
    max_jobs: usize,
) -> Result<Vec<Vec<T>>> {
    if wave_size == 0 {
        return Err(MatrixError::InvalidConfig(
            "wave_size must be at least 1".into(),
        ));
    }

    let total = jobs.len();
    let kept = if max_jobs > 0 { max_jobs.min(total) } else { total };

    let mut waves: Vec<Vec<T>> = Vec::with_capacity(kept.div_ceil(wave_size));
    let mut iter = jobs.into_iter().take(kept).peekable();
    while iter.peek().is_some() {
        waves.push(iter.by_ref().take(wave_size).collect());
    }

    debug!(
        total,
        kept,
        dropped = total - kept,
        waves = waves.len(),
        wave_size,
        "jobs distributed to waves"
    );
    Ok(waves)
}
