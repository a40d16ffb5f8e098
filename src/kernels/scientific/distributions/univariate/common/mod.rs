// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Shared Kernel and Testing Infrastructure*
//!
//! Dense/masked kernel drivers shared by the univariate distributions, plus the
//! helpers and macros their test suites are written with.
//!
//! ## Helper Functions
//! - **Array extraction**: Safe unwrapping of dense arrays without null masks
//! - **Scalar testing**: Single-value operation testing utilities
//! - **Mask creation**: Null mask generation for testing scenarios
//! - **Tolerance checking**: Numerical comparison with configurable precision
//!
//! ## Test Macros
//! The `common_tests!` macro generates the standard empty-input, mask-propagation
//! and bulk-vs-scalar tests for an array kernel.

/// Scalar implementations of common distribution utilities.
pub mod std;

use minarrow::{Bitmask, Buffer, FloatArray};

// Common test helpers

/// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
    assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
    arr.data
}

/// Build a 1-lane slice (`&[T]`) on the fly, call `kernel`,
/// and return the single f64 result for *scalar* comparison.
pub fn scalar_call<F>(kernel: F, x: f64) -> f64
where
    F: Fn(&[f64]) -> FloatArray<f64>,
{
    dense_data(kernel(&[x]))[0]
}

/// Create a mask of given length with exactly the lane `idx` null.
pub fn single_null_mask(len: usize, idx: usize) -> Bitmask {
    let mut m = Bitmask::new_set_all(len, true);
    unsafe { m.set_unchecked(idx, false) };
    m
}

/// Assert absolute difference ≤ `tol`.
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "assert_close failed: {} vs {} (tol={})",
        a,
        b,
        tol
    );
}

/// Assert relative difference ≤ `tol` (absolute when `b == 0`).
pub fn assert_rel_close(a: f64, b: f64, tol: f64) {
    let scale = if b == 0.0 { 1.0 } else { b.abs() };
    assert!(
        (a - b).abs() <= tol * scale,
        "assert_rel_close failed: {} vs {} (rel tol={})",
        a,
        b,
        tol
    );
}

/// Generate the three most-common tests (empty-input, mask propagation,
/// bulk-vs-scalar) for an array kernel.
///
/// `$call` is a closure `(&[f64], Option<&Bitmask>, Option<usize>) -> FloatArray<f64>`;
/// `$xs` are sample inputs, all inside the support.
///
/// Usage:
/// ```ignore
/// common_tests!(pdf_common, |x, m, n| bats_pdf(x, &dist, m, n), [-1.0, 0.0, 1.0]);
/// ```
#[macro_export]
macro_rules! common_tests {
    ($name:ident, $call:expr, [$($xs:expr),+ $(,)?]) => {
        mod $name {
            use super::*;
            use $crate::kernels::scientific::distributions::univariate::common::*;
            use minarrow::{Bitmask, FloatArray};

            fn kernel(x: &[f64], m: Option<&Bitmask>, n: Option<usize>) -> FloatArray<f64> {
                let f = $call;
                f(x, m, n)
            }

            #[test]
            fn empty_input() {
                let arr = kernel(&[], None, None);
                assert!(arr.data.is_empty());
                assert!(arr.null_mask.is_none());
            }

            #[test]
            fn bulk_vs_scalar_consistency() {
                let xs = [$($xs),+];
                let bulk = dense_data(kernel(&xs, None, None));
                for (i, &x) in xs.iter().enumerate() {
                    let scalar = scalar_call(|s: &[f64]| kernel(s, None, None), x);
                    assert_eq!(bulk[i].to_bits(), scalar.to_bits());
                }
            }

            #[test]
            fn mask_propagation() {
                let xs = [$($xs),+];
                let len = xs.len();
                let mask = single_null_mask(len, len - 1);
                let arr = kernel(&xs, Some(&mask), Some(1));
                let out_mask = arr.null_mask.as_ref().unwrap();
                assert!(!out_mask.get(len - 1));
                assert!(arr.data[len - 1].is_nan());
                for i in 0..len - 1 {
                    assert!(out_mask.get(i));
                    assert!(!arr.data[i].is_nan());
                }
            }

            #[test]
            fn zero_null_count_keeps_dense_path() {
                let xs = [$($xs),+];
                let mask = Bitmask::new_set_all(xs.len(), true);
                let arr = kernel(&xs, Some(&mask), Some(0));
                let out_mask = arr.null_mask.as_ref().unwrap();
                assert!((0..xs.len()).all(|i| out_mask.get(i)));
            }
        }
    };
}
