// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *High-Precision Constants for Statistical Computing*
//!
//! Hard-coded constants used by the special functions behind the Student-t bulk.

/// Lanczos approximation coefficients for high-precision gamma function evaluation.
///
/// Coefficient array for the Lanczos approximation to the gamma function with
/// parameters g=7 (auxiliary parameter) and n=9 (number of terms), giving near-machine
/// precision across the positive real domain and via reflection for negative arguments.
pub(crate) const COF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural logarithm of π: ln(π) ≈ 1.144729885849400.
///
/// Appears in the reflection formula and in the Student-t normalising constant.
pub const LN_PI: f64 = 1.1447298858494002;

/// Half of the natural logarithm of 2π: ½ln(2π) ≈ 0.918938533204673.
///
/// Leading term of the Lanczos log-gamma evaluation.
pub const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Natural logarithm of ½, the Student-t tail mass factor.
pub const LN_HALF: f64 = -std::f64::consts::LN_2;
