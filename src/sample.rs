//! Subsampling of a pose set to a fixed count.
//!
//! Large particle stacks are routinely cut down before the O(N²)/O(N³)
//! embedding. Both policies preserve the input order of the surviving
//! poses, so the embedding rows stay aligned with the (subsampled) source
//! table.

use rand::rngs::StdRng;
use rand::{seq::index::sample, SeedableRng};

use crate::quaternion::Quaternion;

/// Subsampling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Deterministic: evenly spaced indices across the set.
    #[default]
    Stride,
    /// Uniform random subset; `seed` of `None` draws from entropy.
    Random { seed: Option<u64> },
}

/// Take at most `count` poses from `poses` under the given policy.
///
/// Returns the whole set (cloned) when `count >= poses.len()`. The
/// survivors keep their relative input order under both policies.
#[must_use]
pub fn subsample(poses: &[Quaternion], count: usize, mode: SampleMode) -> Vec<Quaternion> {
    let n = poses.len();
    if count >= n {
        return poses.to_vec();
    }
    if count == 0 {
        return Vec::new();
    }

    let indices: Vec<usize> = match mode {
        SampleMode::Stride => (0..count).map(|i| i * n / count).collect(),
        SampleMode::Random { seed } => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            let mut picked = sample(&mut rng, n, count).into_vec();
            picked.sort_unstable();
            picked
        }
    };

    indices.into_iter().map(|i| poses[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<Quaternion> {
        // Encode the index in the scalar component for traceability.
        (0..n)
            .map(|i| Quaternion::new(i as f64, 0.0, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn test_count_at_or_above_len_returns_all() {
        let poses = numbered(5);
        assert_eq!(subsample(&poses, 5, SampleMode::Stride), poses);
        assert_eq!(subsample(&poses, 10, SampleMode::Stride), poses);
    }

    #[test]
    fn test_stride_is_even_and_ordered() {
        let poses = numbered(10);
        let picked = subsample(&poses, 5, SampleMode::Stride);
        let ws: Vec<f64> = picked.iter().map(|q| q.w).collect();
        assert_eq!(ws, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_random_seed_reproducible() {
        let poses = numbered(100);
        let mode = SampleMode::Random { seed: Some(42) };
        let a = subsample(&poses, 10, mode);
        let b = subsample(&poses, 10, mode);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_random_preserves_order() {
        let poses = numbered(50);
        let picked = subsample(&poses, 20, SampleMode::Random { seed: Some(7) });
        for pair in picked.windows(2) {
            assert!(pair[0].w < pair[1].w);
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(subsample(&numbered(4), 0, SampleMode::Stride).is_empty());
    }
}
