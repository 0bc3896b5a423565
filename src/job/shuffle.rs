//! Seeded job order permutation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 42;

/// Permutes `jobs` in place with a generator seeded from `seed`.
///
/// The same seed and input always give the same order for a given build.
/// Membership never changes.
pub fn shuffle_jobs<T>(jobs: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    jobs.shuffle(&mut rng);
}
