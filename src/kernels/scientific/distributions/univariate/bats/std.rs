// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **BATS Scalar Implementations** - *Array Kernels over the Scalar Methods*
//!
//! Each kernel maps the corresponding `Bats` method over a slice, lane by lane and in
//! order, through the shared dense/masked drivers.

use minarrow::{Bitmask, FloatArray, Vec64};
use rand::Rng;

use super::Bats;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::univariate::common::std::{
    try_univariate_kernel_f64_std, univariate_kernel_f64_std,
};
use crate::traits::continuous::ContinuousBase;

#[inline(always)]
pub fn bats_pdf_std<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    univariate_kernel_f64_std(x, null_mask, null_count, |xi| dist.pdf(xi))
}

#[inline(always)]
pub fn bats_ln_pdf_std<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    univariate_kernel_f64_std(x, null_mask, null_count, |xi| dist.ln_pdf(xi))
}

#[inline(always)]
pub fn bats_cdf_std<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    univariate_kernel_f64_std(x, null_mask, null_count, |xi| dist.cdf(xi))
}

#[inline(always)]
pub fn bats_ln_cdf_std<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    univariate_kernel_f64_std(x, null_mask, null_count, |xi| dist.ln_cdf(xi))
}

/// Quantile kernel; the first invalid or non-convergent lane aborts the whole call.
#[inline(always)]
pub fn bats_quantile_std<B: ContinuousBase>(
    p: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    try_univariate_kernel_f64_std(p, null_mask, null_count, |pi| dist.quantile(pi))
}

/// Inverse-transform sampling of `n` draws, in the order they are taken from `rng`.
#[inline(always)]
pub fn bats_sample_std<B: ContinuousBase, R: Rng + ?Sized>(
    dist: &Bats<B>,
    n: usize,
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    let mut out = Vec64::with_capacity(n);
    for _ in 0..n {
        out.push(dist.sample(rng)?);
    }
    Ok(FloatArray::from_vec64(out, None))
}
