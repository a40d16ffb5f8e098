// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Statistical Sampling Module - Uniform Draws for Inverse-Transform Sampling
//!
//! The random source is always supplied by the caller; nothing here owns or seeds
//! a generator.

use rand::Rng;
use rand::distr::Open01;

/// Draws `u ~ Uniform(0, 1)` with both endpoints excluded, so `u` is always a valid
/// quantile argument.
#[inline]
pub fn sample_open_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(Open01)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_stay_strictly_inside_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sum = 0.0;
        let n = 20_000;
        for _ in 0..n {
            let u = sample_open_unit(&mut rng);
            assert!(u > 0.0 && u < 1.0);
            sum += u;
        }
        let mean = sum / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean = {mean}");
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(sample_open_unit(&mut a), sample_open_unit(&mut b));
        }
    }
}
