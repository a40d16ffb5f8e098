// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null-Mask and Numeric Helpers*
//!
//! Small helpers shared by the array kernels and the scalar distribution code.

use minarrow::Bitmask;

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// `ln(eᵃ + eᵇ)` without overflow; `-inf` operands are absorbed.
#[inline(always)]
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if hi == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if hi == f64::INFINITY {
        return f64::INFINITY;
    }
    hi + (lo - hi).exp().ln_1p()
}

/// True when `p` lies strictly inside the unit interval (NaN is rejected).
#[inline(always)]
pub fn is_open_unit(p: f64) -> bool {
    p > 0.0 && p < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nulls_prefers_count() {
        let mask = Bitmask::new_set_all(4, true);
        assert!(!has_nulls(Some(0), Some(&mask)));
        assert!(has_nulls(None, Some(&mask)));
        assert!(has_nulls(Some(2), None));
        assert!(!has_nulls(None, None));
    }

    #[test]
    fn log_add_exp_matches_direct_sum() {
        let direct = (2.0f64.exp() + 3.0f64.exp()).ln();
        assert!((log_add_exp(2.0, 3.0) - direct).abs() < 1e-14);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, 1.5), 1.5);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
        // would overflow if exponentiated directly
        assert!((log_add_exp(1000.0, 1000.0) - (1000.0 + 2f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn open_unit_rejects_edges() {
        assert!(is_open_unit(0.5));
        assert!(!is_open_unit(0.0));
        assert!(!is_open_unit(1.0));
        assert!(!is_open_unit(f64::NAN));
    }
}
