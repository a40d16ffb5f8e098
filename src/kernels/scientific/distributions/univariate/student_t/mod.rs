// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Student's t-Distribution Module** - *Heavy-Tailed Bulk for Tail-Transformed Families*
//!
//! Scalar Student-t density and distribution functions for any real `ν > 0`, used
//! as the bulk of the BATS family.
//!
//! ## Mathematical Definition
//! - **PDF**: f(t; ν) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) · (1 + t²/ν)^{−(ν+1)/2}
//! - **CDF**: F(t; ν) = 1 − ½ I_{ν/(ν+t²)}(ν/2, ½) for t ≥ 0, by symmetry below
//! - **Support**: t ∈ (−∞, +∞)
//!
//! ## Numerical notes
//! - `ln(1 + t²/ν)` switches to `2 ln|t| − ln ν` once `t²` overflows, so the
//!   log-density decays correctly out to `|t| ~ f64::MAX`.
//! - The tail mass `½ I_x(ν/2, ½)` is computed in log space, so `ln_cdf` stays
//!   finite far past the point where `cdf` underflows.

use crate::errors::{KernelError, log_invalid_param};
use crate::kernels::scientific::distributions::shared::constants::LN_HALF;
use crate::kernels::scientific::distributions::shared::scalar::{ln_beta, ln_incomplete_beta};
use crate::traits::continuous::ContinuousBase;

/// Student-t distribution with `df` degrees of freedom, location 0 and scale 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    df: f64,
    ln_norm: f64,
}

impl StudentT {
    /// Builds the distribution, caching its log normalising constant.
    ///
    /// ## Errors
    /// `KernelError::InvalidParameter` unless `df` is finite and `> 0`.
    pub fn new(df: f64) -> Result<Self, KernelError> {
        if !(df.is_finite() && df > 0.0) {
            return Err(KernelError::InvalidParameter(log_invalid_param(
                "student_t",
                "df",
                df,
                "must be finite and > 0",
            )));
        }
        // Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) = 1 / (√ν B(ν/2, ½))
        let ln_norm = -(ln_beta(0.5 * df, 0.5) + 0.5 * df.ln());
        Ok(StudentT { df, ln_norm })
    }

    /// Degrees of freedom.
    #[inline]
    pub fn df(&self) -> f64 {
        self.df
    }

    /// `ln(1 + t²/ν)`
    #[inline(always)]
    fn ln_kernel(&self, t: f64) -> f64 {
        let r = t * t / self.df;
        if r.is_finite() {
            r.ln_1p()
        } else {
            2.0 * t.abs().ln() - self.df.ln()
        }
    }

    /// `ln P(T ≤ −|t|)`, the log mass of the tail beyond `|t|`.
    #[inline(always)]
    fn ln_tail(&self, t: f64) -> f64 {
        if t.is_infinite() {
            return f64::NEG_INFINITY;
        }
        // x = ν / (ν + t²)
        let ln_x = -self.ln_kernel(t);
        let ln_1mx = if t == 0.0 {
            f64::NEG_INFINITY
        } else {
            2.0 * t.abs().ln() - self.df.ln() + ln_x
        };
        LN_HALF + ln_incomplete_beta(0.5 * self.df, 0.5, ln_x, ln_1mx)
    }
}

impl ContinuousBase for StudentT {
    #[inline]
    fn pdf(&self, t: f64) -> f64 {
        self.ln_pdf(t).exp()
    }

    #[inline]
    fn ln_pdf(&self, t: f64) -> f64 {
        self.ln_norm - 0.5 * (self.df + 1.0) * self.ln_kernel(t)
    }

    #[inline]
    fn cdf(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        let tail = self.ln_tail(t).exp();
        if t < 0.0 { tail } else { 1.0 - tail }
    }

    #[inline]
    fn ln_cdf(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        let ln_tail = self.ln_tail(t);
        if t < 0.0 {
            ln_tail
        } else {
            (-ln_tail.exp()).ln_1p()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::scientific::distributions::univariate::common::{
        assert_close, assert_rel_close,
    };

    // PDF – reference values & properties
    #[test]
    fn pdf_reference_values_df1() {
        // df = 1 (Cauchy): 1/π, 1/(2π), 1/(5π)
        let t = StudentT::new(1.0).unwrap();
        let expect = [0.3183098861837907, 0.15915494309189535, 0.06366197723675814];
        for (x, e) in [0.0, 1.0, 2.0].iter().zip(expect.iter()) {
            assert_close(t.pdf(*x), *e, 1e-14);
        }
    }

    #[test]
    fn pdf_reference_values_df5() {
        // f(0; 5) = Γ(3) / (√(5π) Γ(2.5))
        let t = StudentT::new(5.0).unwrap();
        assert_rel_close(t.pdf(0.0), 0.3796066898224944, 1e-13);
        assert_rel_close(t.pdf(2.0), 0.06509031032621647, 1e-12);
    }

    #[test]
    fn pdf_even_function() {
        let t = StudentT::new(7.0).unwrap();
        for &x in &[-3.2, -1.1, 0.5, 2.4] {
            assert_close(t.pdf(x), t.pdf(-x), 1e-15);
        }
    }

    #[test]
    fn ln_pdf_decays_past_overflow_of_square() {
        let t = StudentT::new(3.0).unwrap();
        let lp = t.ln_pdf(1e200);
        assert!(lp.is_finite() && lp < -1000.0);
        assert_eq!(t.ln_pdf(f64::INFINITY), f64::NEG_INFINITY);
        assert_eq!(t.pdf(f64::NEG_INFINITY), 0.0);
    }

    // CDF – symmetry & limits
    #[test]
    fn cdf_reference_values() {
        let t = StudentT::new(1.0).unwrap();
        // Cauchy: ½ + atan(x)/π
        for &x in &[-4.0, -1.0, -0.3, 0.0, 0.3, 1.0, 4.0] {
            let expect = 0.5 + f64::atan(x) / std::f64::consts::PI;
            assert_close(t.cdf(x), expect, 1e-13);
        }
        let t = StudentT::new(5.0).unwrap();
        assert_close(t.cdf(2.0), 0.9490302605850709, 1e-12);
    }

    #[test]
    fn cdf_symmetry_non_integer_df() {
        let t = StudentT::new(0.7).unwrap();
        for &x in &[-4.0, -1.0, -0.3, 0.3, 1.0, 4.0] {
            assert_close(t.cdf(x), 1.0 - t.cdf(-x), 1e-13);
        }
        assert_eq!(t.cdf(0.0), 0.5);
    }

    #[test]
    fn cdf_tail_extremes() {
        let t = StudentT::new(2.0).unwrap();
        assert_close(t.cdf(-1e308), 0.0, 1e-15);
        assert_close(t.cdf(1e308), 1.0, 1e-15);
        assert_eq!(t.cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(t.cdf(f64::INFINITY), 1.0);
        assert!(t.cdf(f64::NAN).is_nan());
    }

    #[test]
    fn ln_cdf_far_left_tail() {
        // df = 2 has a closed form: F(t) = ½ (1 + t / √(2 + t²))
        // for t → −∞: F(t) ≈ 1/(2 t²)
        let t = StudentT::new(2.0).unwrap();
        let x = -1e200;
        let expect = -(2.0f64.ln()) - 2.0 * (1e200f64).ln();
        assert_rel_close(t.ln_cdf(x), expect, 1e-10);
        assert_eq!(t.ln_cdf(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(t.ln_cdf(f64::INFINITY), 0.0);
    }

    #[test]
    fn ln_cdf_matches_cdf_in_bulk() {
        let t = StudentT::new(4.5).unwrap();
        for &x in &[-6.0, -2.0, -0.1, 0.0, 0.4, 3.0] {
            assert_close(t.ln_cdf(x).exp(), t.cdf(x), 1e-14);
        }
    }

    #[test]
    fn large_df_approaches_normal() {
        // 60-digit references
        let t = StudentT::new(1e6).unwrap();
        assert_rel_close(t.pdf(0.0), 0.39894218066587504, 1e-13);
        assert_rel_close(t.cdf(1.0), 0.84134462508321094, 1e-12);
        assert_rel_close(t.cdf(-3.0), 0.0013499312707108985, 1e-10);

        let t = StudentT::new(1e10).unwrap();
        assert_rel_close(t.pdf(0.0), 0.39894228039145912, 1e-13);
        assert_rel_close(t.cdf(1.0), 0.84134474605644441, 1e-10);
    }

    #[test]
    fn invalid_df_errors() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-2.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
        assert!(StudentT::new(f64::INFINITY).is_err());
    }
}
