// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Distribution Kernel Error Handling*
//!
//! Error types for BATS construction and evaluation with structured error reporting.
//!
//! ## Error Categories
//! - **Parameter Errors**: Scale or degrees of freedom outside their domain
//! - **Quantile Errors**: Probabilities outside the open unit interval
//! - **Convergence Errors**: Root-finding that exhausted its iteration budget
//!
//! Support-boundary values (`0.0`, `1.0`, `-inf`) returned by the density and
//! distribution functions are specified results, not errors.

use core::fmt;
use std::error::Error;

/// Error type for all distribution kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A distribution parameter is outside its domain (e.g. `τ ≤ 0`, `ν ≤ 0`, NaN).
    InvalidParameter(String),

    /// A quantile was requested for a probability outside `(0, 1)`.
    InvalidQuantileInput(String),

    /// A bracketed root search failed to converge within its budget.
    NonConvergence(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            KernelError::InvalidQuantileInput(msg) => {
                write!(f, "Invalid quantile input: {}", msg)
            }
            KernelError::NonConvergence(msg) => write!(f, "Non-convergence: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for a parameter that failed validation.
///
/// # Arguments
/// * `fname` - Function name where the check failed
/// * `name` - Parameter name
/// * `value` - Offending value
/// * `rule` - Human readable constraint, e.g. `"must be > 0"`
pub fn log_invalid_param(fname: &str, name: &str, value: f64, rule: &str) -> String {
    format!("{} => {} = {} {}", fname, name, value, rule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let e = KernelError::InvalidParameter(log_invalid_param("bats", "tau0", -1.0, "must be > 0"));
        assert_eq!(e.to_string(), "Invalid parameter: bats => tau0 = -1 must be > 0");
        let e = KernelError::NonConvergence("bisect".into());
        assert!(e.to_string().starts_with("Non-convergence"));
    }
}
