// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Numerical Thresholds and Search Budgets*
//!
//! Compile-time constants controlling the branch cutoffs of the BATS transforms and
//! the termination policy of the quantile search.

/// Argument above which `Ψ(x) = ln(1 + eˣ)` is replaced by its asymptote `x`.
///
/// At 25 the neglected term `ln(1 + e⁻ˣ)` is below `1.4e-11`, and `eˣ` is still far
/// from overflow on the other side of the branch.
pub const PSI_LINEAR_CUTOFF: f64 = 25.0;

/// Absolute tolerance on a tail shape `κ` below which the first-order expansion in
/// `κ` replaces `(1 + κΨ)^{1/κ}`.
///
/// Chosen empirically: wide enough that the direct power never sees the `0/0`
/// regime, narrow enough that the dropped `O(κ²)` term stays below double precision
/// noise for the bulk of the distribution.
pub const SMALL_SHAPE_TOL: f64 = 1e-8;

/// Bracket width (relative to `1 + |x|`) at which the quantile bisection stops.
pub const QUANTILE_X_TOL: f64 = 1e-12;

/// Hard cap on bisection steps for a single quantile.
///
/// Bisection on doubles always terminates within ~2100 halvings (the midpoint
/// collapses onto an endpoint), so this only trips on NaN-producing inputs.
pub const QUANTILE_MAX_ITER: usize = 2_000;

/// Hard cap on step doublings when replacing an infinite support bound with a finite
/// quantile bracket. 1100 doublings from a unit step overflow `f64`.
pub const QUANTILE_MAX_BRACKET_EXPANSIONS: usize = 1_100;
