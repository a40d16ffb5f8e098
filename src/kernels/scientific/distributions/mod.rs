// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Bulk-And-Tails Distribution Computing*
//!
//! Kernels for the BATS (Bulk-And-Tails) distribution family and the Student-t
//! distribution it is built on: density, log-density, cumulative probability,
//! log-cumulative probability, quantiles and random sampling.
//!
//! ## Core Statistical Functions
//! - **Probability density**: closed-form transform derivative, no numerical differentiation
//! - **Cumulative distribution**: log-space left tail for extreme quantiles
//! - **Quantile functions**: bracketed bisection on the CDF
//! - **Random sampling**: inverse transform from a caller-supplied `rand::Rng`
//!
//! ## Arrow Integration and Null Handling
//! Array kernels take `&[f64]` with an optional validity `Bitmask` and null count, and
//! return a `FloatArray<f64>`:
//! - **Null-aware processing**: null lanes are written as `NaN` and the mask is propagated
//! - **Dense fast path**: a `null_count` of `0` skips per-lane mask checks
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics), leaving it to the user to subsequently
//! treat them as nulls if they wish, given that there are numerical scenarios where
//! they represent information gain. Support-edge values (`0.0`, `1.0`, `-inf`) are
//! results, not nulls.
//!
//! ## Numerical Precision and Stability
//! See `./tests` for reference tolerances, measured against an independent
//! high-precision evaluation. Platform specific differences in `libm` may shift the
//! last few bits.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to correctness,
//! fitness for any particular purpose, or suitability for uses such as in
//! life-critical, safety-critical, or financial applications.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants
/// - **`roots`**: Bracketed root finding for inverse CDFs
/// - **`sampler`**: Uniform draws for inverse-transform sampling
/// - **`scalar`**: Special functions (log-gamma, incomplete beta)
pub mod shared {
    pub mod constants;
    pub mod roots;
    pub mod sampler;
    pub mod scalar;
}

/// # **Univariate Distributions** - *Single-Variable Probability Distributions*
///
/// - **Continuous**: bats, student_t
/// - **Common utilities**: Shared kernel drivers and test helpers
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod bats;
    pub mod student_t;
}
