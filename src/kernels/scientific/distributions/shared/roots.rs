// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Bracketed Root Finding** - *Bisection for Monotone Inverse Problems*
//!
//! Quantile functions without a closed form are recovered by bisection on
//! `cdf(x) − p`. Bisection is slow relative to Newton refinement but needs nothing
//! beyond a valid sign change, which a monotone CDF on its support always gives.

use crate::errors::KernelError;

/// Finds a root of `f` in `[lo, hi]` by bisection.
///
/// Requires `f(lo)` and `f(hi)` to differ in sign (either may be exactly zero).
/// Stops when the bracket is narrower than `x_tol · (1 + |mid|)`, when the midpoint
/// can no longer be separated from an endpoint in `f64`, or when `f(mid)` is exactly
/// zero.
///
/// ## Errors
/// `KernelError::NonConvergence` if the bracket is invalid, `f` yields NaN, or
/// `max_iter` halvings are exhausted.
pub fn bisect<F>(f: F, mut lo: f64, mut hi: f64, x_tol: f64, max_iter: usize) -> Result<f64, KernelError>
where
    F: Fn(f64) -> f64,
{
    if !(lo < hi) || !lo.is_finite() || !hi.is_finite() {
        return Err(KernelError::NonConvergence(format!(
            "bisect => invalid bracket [{}, {}]",
            lo, hi
        )));
    }

    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo.is_nan() || f_hi.is_nan() {
        return Err(KernelError::NonConvergence(format!(
            "bisect => NaN at bracket endpoints [{}, {}]",
            lo, hi
        )));
    }
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(KernelError::NonConvergence(format!(
            "bisect => no sign change on [{}, {}] (f = {}, {})",
            lo, hi, f_lo, f_hi
        )));
    }

    for _ in 0..max_iter {
        // halves before adding: avoids overflow when the bracket spans most of f64
        let mid = 0.5 * lo + 0.5 * hi;
        if mid <= lo || mid >= hi || hi - lo <= x_tol * (1.0 + mid.abs()) {
            return Ok(mid);
        }
        let f_mid = f(mid);
        if f_mid.is_nan() {
            return Err(KernelError::NonConvergence(format!(
                "bisect => NaN at x = {}",
                mid
            )));
        }
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(KernelError::NonConvergence(format!(
        "bisect => bracket [{}, {}] still wider than tolerance after {} iterations",
        lo, hi, max_iter
    )))
}
