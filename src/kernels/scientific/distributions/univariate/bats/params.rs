// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **BATS Parameters and Support** - *Validated Parameter Sets and Their Bounds*

use crate::errors::{KernelError, log_invalid_param};

use super::transform::ipsi;

/// Shape `κ`, scale `τ` and location `φ` of one tail transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailParams {
    pub shape: f64,
    pub scale: f64,
    pub location: f64,
}

impl TailParams {
    #[inline]
    pub const fn new(shape: f64, scale: f64, location: f64) -> Self {
        TailParams {
            shape,
            scale,
            location,
        }
    }

    /// Standardised coordinate `z* = Ψ⁻¹(−1/κ)` where `1 + κΨ(z)` reaches zero, or
    /// `None` for a tail with `κ ≥ 0`, which never closes.
    #[inline]
    pub fn edge(&self) -> Option<f64> {
        if self.shape < 0.0 {
            Some(ipsi(-1.0 / self.shape))
        } else {
            None
        }
    }

    fn validate(&self, fname: &str, side: &str) -> Result<(), KernelError> {
        let checks = [
            ("shape", self.shape, self.shape.is_finite(), "must be finite"),
            (
                "scale",
                self.scale,
                self.scale.is_finite() && self.scale > 0.0,
                "must be finite and > 0",
            ),
            ("location", self.location, self.location.is_finite(), "must be finite"),
        ];
        for (name, value, ok, rule) in checks {
            if !ok {
                return Err(KernelError::InvalidParameter(log_invalid_param(
                    fname,
                    &format!("{side}.{name}"),
                    value,
                    rule,
                )));
            }
        }
        Ok(())
    }
}

/// The seven BATS parameters `(κ0, τ0, φ0, κ1, τ1, φ1, ν)`.
///
/// `lower` shapes the left tail, `upper` the right tail, `df` is the degrees of
/// freedom of the Student-t bulk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatsParams {
    pub lower: TailParams,
    pub upper: TailParams,
    pub df: f64,
}

impl BatsParams {
    /// Validating constructor.
    ///
    /// ## Errors
    /// `KernelError::InvalidParameter` if either scale or `df` is `≤ 0`, or any
    /// parameter is non-finite.
    pub fn new(lower: TailParams, upper: TailParams, df: f64) -> Result<Self, KernelError> {
        let params = BatsParams { lower, upper, df };
        params.validate()?;
        Ok(params)
    }

    /// Builds from the flat tuple order `[κ0, τ0, φ0, κ1, τ1, φ1, ν]`.
    pub fn from_array(p: [f64; 7]) -> Result<Self, KernelError> {
        Self::new(
            TailParams::new(p[0], p[1], p[2]),
            TailParams::new(p[3], p[4], p[5]),
            p[6],
        )
    }

    /// Flat tuple order `[κ0, τ0, φ0, κ1, τ1, φ1, ν]`.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.lower.shape,
            self.lower.scale,
            self.lower.location,
            self.upper.shape,
            self.upper.scale,
            self.upper.location,
            self.df,
        ]
    }

    pub fn validate(&self) -> Result<(), KernelError> {
        self.lower.validate("bats", "lower")?;
        self.upper.validate("bats", "upper")?;
        if !(self.df.is_finite() && self.df > 0.0) {
            return Err(KernelError::InvalidParameter(log_invalid_param(
                "bats",
                "df",
                self.df,
                "must be finite and > 0",
            )));
        }
        Ok(())
    }
}

/// Lower and upper edge of the support; either may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportBounds {
    pub lower: f64,
    pub upper: f64,
}

impl SupportBounds {
    /// `φ0 − τ0·z*(κ0)` below and `φ1 + τ1·z*(κ1)` above; `∓inf` for a tail with
    /// `κ ≥ 0`.
    pub fn from_params(params: &BatsParams) -> Self {
        let lower = match params.lower.edge() {
            Some(z) => params.lower.location - params.lower.scale * z,
            None => f64::NEG_INFINITY,
        };
        let upper = match params.upper.edge() {
            Some(z) => params.upper.location + params.upper.scale * z,
            None => f64::INFINITY,
        };
        SupportBounds { lower, upper }
    }

    /// Open-interval membership; the edges themselves carry zero density.
    #[inline(always)]
    pub fn contains(&self, x: f64) -> bool {
        x > self.lower && x < self.upper
    }

    #[inline]
    pub fn is_bounded_below(&self) -> bool {
        self.lower.is_finite()
    }

    #[inline]
    pub fn is_bounded_above(&self) -> bool {
        self.upper.is_finite()
    }
}
