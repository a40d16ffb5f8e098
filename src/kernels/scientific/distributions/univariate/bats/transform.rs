// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **BATS Transforms** - *Stabilised Softplus and Tail Power Maps*
//!
//! The building blocks of the Bulk-And-Tails map from the data axis onto the
//! Student-t axis.
//!
//! - `Ψ(x) = ln(1 + eˣ)` (softplus) with its derivative and inverse, each switched to
//!   the linear asymptote above [`PSI_LINEAR_CUTOFF`] so that `eˣ` never overflows.
//! - `H_part(x) = (1 + κΨ(z))^{1/κ}` with `z = (x − φ)/τ`, one per tail. For
//!   `|κ| < SMALL_SHAPE_TOL` the first-order expansion in κ is used instead.
//! - `H(x) = H_part(x; upper) − H_part(−x; lower mirrored)`.
//!
//! Derivatives are closed form. `ln_dh_part` returns the log of the derivative
//! assembled in log space, which the log-density uses to avoid `0 · ∞`.

use crate::config::{PSI_LINEAR_CUTOFF, SMALL_SHAPE_TOL};

use super::params::TailParams;

/// Softplus `Ψ(x) = ln(1 + eˣ)`; returns `x` itself from the cutoff upward.
#[inline(always)]
pub fn psi(x: f64) -> f64 {
    if x < PSI_LINEAR_CUTOFF {
        x.exp().ln_1p()
    } else {
        x
    }
}

/// `dΨ/dx`, the logistic function `eˣ/(1 + eˣ)`; exactly `1.0` from the cutoff upward.
#[inline(always)]
pub fn dpsi(x: f64) -> f64 {
    if x < PSI_LINEAR_CUTOFF {
        let e = x.exp();
        e / (1.0 + e)
    } else {
        1.0
    }
}

/// `ln dΨ(x) = x − Ψ(x)`, finite for arbitrarily negative `x`.
#[inline(always)]
pub fn ln_dpsi(x: f64) -> f64 {
    if x < PSI_LINEAR_CUTOFF { x - psi(x) } else { 0.0 }
}

/// Inverse softplus `Ψ⁻¹(y) = ln(eʸ − 1)`, defined for `y ≥ 0`.
///
/// The `max(0, ·)` keeps rounding in `eʸ − 1` from producing the log of a negative
/// number; `y = 0` maps to `-inf`.
#[inline(always)]
pub fn ipsi(y: f64) -> f64 {
    if y < PSI_LINEAR_CUTOFF {
        y.exp_m1().max(0.0).ln()
    } else {
        y
    }
}

#[inline(always)]
fn is_small_shape(shape: f64) -> bool {
    shape.abs() < SMALL_SHAPE_TOL
}

/// One tail's power transform evaluated at `z = (x − location)/scale`.
///
/// Generic branch `(1 + κΨ(z))^{1/κ}`; for `|κ| < SMALL_SHAPE_TOL` the expansion
/// `e^Ψ·(1 − ½Ψ²κ)`, which removes the `0/0` form of the exponent as κ vanishes.
/// Once `e^Ψ` overflows the expansion returns `+inf`.
///
/// For `κ < 0` the base `1 + κΨ(z)` reaches zero at the support edge. It is clamped
/// at zero so a point that rounding pushed marginally past the edge maps to `+inf`
/// rather than NaN.
#[inline(always)]
pub fn h_part(x: f64, shape: f64, scale: f64, location: f64) -> f64 {
    let p = psi((x - location) / scale);
    if is_small_shape(shape) {
        let e = p.exp();
        if e.is_infinite() {
            return e;
        }
        e * (1.0 - 0.5 * p * p * shape)
    } else {
        (1.0 + shape * p).max(0.0).powf(1.0 / shape)
    }
}

/// `d/dx H_part(x; κ, τ, φ)`.
///
/// Generic branch `(1/τ)·dΨ(z)·(1 + κΨ(z))^{1/κ − 1}`; small-κ branch is the exact
/// derivative of the expansion, `(1/τ)·dΨ(z)·e^Ψ·(1 − κ(Ψ + Ψ²/2))`.
#[inline(always)]
pub fn dh_part(x: f64, shape: f64, scale: f64, location: f64) -> f64 {
    let z = (x - location) / scale;
    let p = psi(z);
    if is_small_shape(shape) {
        let e = p.exp();
        if e.is_infinite() {
            return e;
        }
        dpsi(z) * e * (1.0 - shape * (p + 0.5 * p * p)) / scale
    } else {
        dpsi(z) * (1.0 + shape * p).max(0.0).powf(1.0 / shape - 1.0) / scale
    }
}

/// `ln(d/dx H_part(x; κ, τ, φ))`, computed without forming the derivative itself.
#[inline(always)]
pub fn ln_dh_part(x: f64, shape: f64, scale: f64, location: f64) -> f64 {
    let z = (x - location) / scale;
    let p = psi(z);
    let head = ln_dpsi(z) - scale.ln();
    if is_small_shape(shape) {
        head + p + (-shape * (p + 0.5 * p * p)).ln_1p()
    } else {
        head + (1.0 / shape - 1.0) * (shape * p).max(-1.0).ln_1p()
    }
}

/// Composite transform `H(x) = H_part(x; upper) − H_part(−x; κ0, τ0, −φ0)`.
///
/// Increasing wherever both tail terms are, which holds throughout the support.
#[inline(always)]
pub fn h(x: f64, lower: &TailParams, upper: &TailParams) -> f64 {
    h_part(x, upper.shape, upper.scale, upper.location)
        - h_part(-x, lower.shape, lower.scale, -lower.location)
}

/// `dH/dx = H_part'(x; upper) + H_part'(−x; lower mirrored)`.
#[inline(always)]
pub fn dh(x: f64, lower: &TailParams, upper: &TailParams) -> f64 {
    dh_part(x, upper.shape, upper.scale, upper.location)
        + dh_part(-x, lower.shape, lower.scale, -lower.location)
}

/// `ln(dH/dx)` as a log-sum of the two tail log-derivatives.
#[inline(always)]
pub fn ln_dh(x: f64, lower: &TailParams, upper: &TailParams) -> f64 {
    crate::utils::log_add_exp(
        ln_dh_part(x, upper.shape, upper.scale, upper.location),
        ln_dh_part(-x, lower.shape, lower.scale, -lower.location),
    )
}
