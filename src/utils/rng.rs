//! Random sampling helpers.
//!
//! Randomness is always supplied by the caller as a `rand::Rng` handle, so
//! two networks in the same process never share generator state and a fixed
//! seed reproduces a whole run.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator for reproducible runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw `batch_size` indices uniformly from `[0, num_samples)`, with replacement.
///
/// `batch_size` may exceed `num_samples`. Returns an empty batch when there
/// is nothing to sample from.
pub fn sample_batch_indices<R: Rng + ?Sized>(
    rng: &mut R,
    num_samples: usize,
    batch_size: usize,
) -> Vec<usize> {
    if num_samples == 0 {
        return Vec::new();
    }
    let between = Uniform::new(0, num_samples);
    (0..batch_size).map(|_| between.sample(&mut *rng)).collect()
}
