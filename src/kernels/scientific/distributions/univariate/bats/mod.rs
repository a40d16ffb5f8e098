// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **BATS Distribution Module** - *Bulk-And-Tails with Independent Tail Shapes*
//!
//! The Bulk-And-Tails distribution maps the data axis onto a Student-t axis through a
//! monotone transform `H` whose two halves carry their own shape, scale and location.
//! Each tail can be made heavier or lighter than the Student-t bulk, and a negative
//! shape closes that side of the support at a finite edge.
//!
//! ## Mathematical Definition
//! - **Transform**: `H(x) = H_part(x; κ1, τ1, φ1) − H_part(−x; κ0, τ0, −φ0)` with
//!   `H_part(x; κ, τ, φ) = (1 + κΨ((x − φ)/τ))^{1/κ}` and `Ψ` the softplus
//! - **PDF**: `f(x) = f_T(H(x); ν) · H'(x)`
//! - **CDF**: `F(x) = F_T(H(x); ν)`
//! - **Support**: `(x_min, x_max)`, finite on any side whose shape is negative
//!
//! ## Parameters
//! `(κ0, τ0, φ0)` lower tail, `(κ1, τ1, φ1)` upper tail, `ν` Student-t degrees of
//! freedom. Scales and `ν` must be positive, all seven finite.
//!
//! ## Usage Examples
//! ```rust,ignore
//! use minarrow::vec64;
//! use rand::{SeedableRng, rngs::StdRng};
//! use bats_kernels::kernels::scientific::distributions::univariate::bats::*;
//!
//! let dist = Bats::from_array([0.2, 1.0, 0.0, 0.2, 1.0, 0.0, 5.0]).unwrap();
//! let x = vec64![-1.0, 0.0, 0.5, 2.0];
//! let pdf = bats_pdf(&x, &dist, None, None);
//! let cdf = bats_cdf(&x, &dist, None, None);
//!
//! let median = dist.quantile(0.5).unwrap();
//! let mut rng = StdRng::seed_from_u64(11);
//! let draws = bats_sample(&dist, 1_000, &mut rng).unwrap();
//! ```

mod std;

pub mod params;
pub mod transform;

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::config::{QUANTILE_MAX_BRACKET_EXPANSIONS, QUANTILE_MAX_ITER, QUANTILE_X_TOL};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::roots::bisect;
use crate::kernels::scientific::distributions::shared::sampler::sample_open_unit;
use crate::kernels::scientific::distributions::univariate::student_t::StudentT;
use crate::traits::continuous::ContinuousBase;
use crate::utils::is_open_unit;

pub use params::{BatsParams, SupportBounds, TailParams};

/// A BATS distribution over base `B`, with its support computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bats<B: ContinuousBase = StudentT> {
    params: BatsParams,
    bounds: SupportBounds,
    base: B,
}

impl Bats<StudentT> {
    /// Builds the distribution over a Student-t bulk with `params.df` degrees of freedom.
    ///
    /// ## Errors
    /// `KernelError::InvalidParameter` for a non-positive scale or `df`, or any
    /// non-finite parameter.
    pub fn new(params: BatsParams) -> Result<Self, KernelError> {
        params.validate()?;
        let base = StudentT::new(params.df)?;
        Ok(Self::assemble(params, base))
    }

    /// Builds from `[κ0, τ0, φ0, κ1, τ1, φ1, ν]`.
    pub fn from_array(p: [f64; 7]) -> Result<Self, KernelError> {
        Self::new(BatsParams::from_array(p)?)
    }
}

impl<B: ContinuousBase> Bats<B> {
    /// Builds the distribution over a caller-supplied base. `params.df` is still
    /// validated but otherwise unused.
    pub fn with_base(params: BatsParams, base: B) -> Result<Self, KernelError> {
        params.validate()?;
        Ok(Self::assemble(params, base))
    }

    fn assemble(params: BatsParams, base: B) -> Self {
        let bounds = SupportBounds::from_params(&params);
        Bats {
            params,
            bounds,
            base,
        }
    }

    #[inline]
    pub fn params(&self) -> &BatsParams {
        &self.params
    }

    #[inline]
    pub fn bounds(&self) -> SupportBounds {
        self.bounds
    }

    #[inline]
    pub fn base(&self) -> &B {
        &self.base
    }

    /// True for `x` strictly inside the support.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.bounds.contains(x)
    }

    /// The composite map `H(x)` onto the base axis.
    #[inline(always)]
    pub fn transform(&self, x: f64) -> f64 {
        transform::h(x, &self.params.lower, &self.params.upper)
    }

    /// Density at `x`, clamped at zero.
    ///
    /// Inside the support the density is non-negative analytically; the clamp only
    /// absorbs rounding noise. See [`Bats::pdf_unclamped`] for the raw product.
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        let v = self.pdf_unclamped(x);
        if v < 0.0 {
            log::debug!("bats pdf clamped {v} to 0 at x = {x}");
            0.0
        } else {
            v
        }
    }

    /// `f_T(H(x)) · H'(x)` without the clamp. `0.0` outside the support and wherever
    /// `H(x)` has overflowed.
    pub fn pdf_unclamped(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if !self.bounds.contains(x) {
            return 0.0;
        }
        let t = self.transform(x);
        if !t.is_finite() {
            return 0.0;
        }
        let slope = transform::dh(x, &self.params.lower, &self.params.upper);
        let v = self.base.pdf(t) * slope;
        if v.is_finite() {
            v
        } else {
            // 0 · ∞ next to a finite edge
            self.ln_pdf(x).exp()
        }
    }

    /// Log-density at `x`; `-inf` outside the support.
    pub fn ln_pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if !self.bounds.contains(x) {
            return f64::NEG_INFINITY;
        }
        let t = self.transform(x);
        if !t.is_finite() {
            return f64::NEG_INFINITY;
        }
        let ln_base = self.base.ln_pdf(t);
        if ln_base == f64::NEG_INFINITY {
            return f64::NEG_INFINITY;
        }
        ln_base + transform::ln_dh(x, &self.params.lower, &self.params.upper)
    }

    /// `P(X ≤ x)`; exactly `0.0` at or below `x_min` and `1.0` at or above `x_max`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= self.bounds.lower {
            return 0.0;
        }
        if x >= self.bounds.upper {
            return 1.0;
        }
        let t = self.transform(x);
        if t.is_infinite() {
            return if t > 0.0 { 1.0 } else { 0.0 };
        }
        self.base.cdf(t)
    }

    /// `ln P(X ≤ x)`, finite in the left tail where [`Bats::cdf`] underflows.
    pub fn ln_cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x <= self.bounds.lower {
            return f64::NEG_INFINITY;
        }
        if x >= self.bounds.upper {
            return 0.0;
        }
        let t = self.transform(x);
        if t.is_infinite() {
            return if t > 0.0 { 0.0 } else { f64::NEG_INFINITY };
        }
        self.base.ln_cdf(t)
    }

    /// Inverse CDF by bisection on `cdf(x) − p`.
    ///
    /// ## Errors
    /// - `KernelError::InvalidQuantileInput` unless `0 < p < 1`
    /// - `KernelError::NonConvergence` if no finite bracket is found or the
    ///   bisection exhausts its budget
    pub fn quantile(&self, p: f64) -> Result<f64, KernelError> {
        if !is_open_unit(p) {
            return Err(KernelError::InvalidQuantileInput(format!(
                "bats_quantile => p = {} must lie in (0, 1)",
                p
            )));
        }
        let (lo, hi) = self.quantile_bracket(p)?;
        bisect(|x| self.cdf(x) - p, lo, hi, QUANTILE_X_TOL, QUANTILE_MAX_ITER)
            .inspect_err(|e| log::warn!("bats quantile failed for p = {p}: {e}"))
    }

    /// Finite `[lo, hi]` with `cdf(lo) < p < cdf(hi)`. A finite support edge is used
    /// as is; an open side is searched by doubling a step out from the midpoint of
    /// the two locations, in units of the larger scale.
    fn quantile_bracket(&self, p: f64) -> Result<(f64, f64), KernelError> {
        let lower = &self.params.lower;
        let upper = &self.params.upper;
        let centre = 0.5 * (lower.location + upper.location);
        let unit = lower.scale.max(upper.scale);

        let lo = if self.bounds.is_bounded_below() {
            self.bounds.lower
        } else {
            self.expand(centre, -unit, |x| self.cdf(x) < p)?
        };
        let hi = if self.bounds.is_bounded_above() {
            self.bounds.upper
        } else {
            self.expand(centre, unit, |x| self.cdf(x) > p)?
        };
        log::trace!("bats quantile bracket for p = {p}: [{lo}, {hi}]");
        Ok((lo, hi))
    }

    fn expand<F>(&self, centre: f64, step: f64, done: F) -> Result<f64, KernelError>
    where
        F: Fn(f64) -> bool,
    {
        let mut step = step;
        for _ in 0..QUANTILE_MAX_BRACKET_EXPANSIONS {
            let x = centre + step;
            if !x.is_finite() {
                break;
            }
            if done(x) {
                return Ok(x);
            }
            step *= 2.0;
        }
        let err = KernelError::NonConvergence(format!(
            "bats_quantile => no finite bracket {} of {}",
            if step < 0.0 { "below" } else { "above" },
            centre
        ));
        log::warn!("{err}");
        Err(err)
    }

    /// One draw by inverse transform of an open-unit uniform from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, KernelError> {
        self.quantile(sample_open_unit(rng))
    }
}

/// BATS PDF - vectorised, null-aware.
/// Null lanes are `NaN` in the output and the mask is propagated.
///
/// # Parameters
/// - `x`: input data
/// - `dist`: the distribution
/// - `null_mask`: optional input null bitmap
/// - `null_count`: optional input null count
#[inline(always)]
pub fn bats_pdf<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    std::bats_pdf_std(x, dist, null_mask, null_count)
}

/// BATS log-PDF - vectorised, null-aware.
#[inline(always)]
pub fn bats_ln_pdf<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    std::bats_ln_pdf_std(x, dist, null_mask, null_count)
}

/// BATS CDF - vectorised, null-aware.
#[inline(always)]
pub fn bats_cdf<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    std::bats_cdf_std(x, dist, null_mask, null_count)
}

/// BATS log-CDF - vectorised, null-aware.
#[inline(always)]
pub fn bats_ln_cdf<B: ContinuousBase>(
    x: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> FloatArray<f64> {
    std::bats_ln_cdf_std(x, dist, null_mask, null_count)
}

/// BATS quantile (inverse CDF) - vectorised, null-aware.
///
/// Fails on the first non-null `p` outside `(0, 1)` or the first search that does
/// not converge; null lanes are never evaluated.
#[inline(always)]
pub fn bats_quantile<B: ContinuousBase>(
    p: &[f64],
    dist: &Bats<B>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::bats_quantile_std(p, dist, null_mask, null_count)
}

/// Draws `n` independent values from `dist` using the caller's `rng`.
#[inline(always)]
pub fn bats_sample<B: ContinuousBase, R: Rng + ?Sized>(
    dist: &Bats<B>,
    n: usize,
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    std::bats_sample_std(dist, n, rng)
}
