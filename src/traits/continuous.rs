// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

/// A continuous distribution on the real line that can serve as the bulk of a
/// tail-transformed family.
///
/// Implementations must accept `±inf` and return the limiting values
/// (`pdf → 0`, `ln_pdf → -inf`, `cdf → 0 / 1`, `ln_cdf → -inf / 0`).
pub trait ContinuousBase {
    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the density at `x`.
    fn ln_pdf(&self, x: f64) -> f64;

    /// Cumulative probability `P(X ≤ x)`.
    fn cdf(&self, x: f64) -> f64;

    /// Natural log of the cumulative probability, accurate in the far left tail.
    fn ln_cdf(&self, x: f64) -> f64 {
        self.cdf(x).ln()
    }
}
