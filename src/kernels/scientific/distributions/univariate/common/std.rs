// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, Vec64};

use crate::errors::KernelError;
use crate::utils::has_nulls;

/// Dense kernel helper
///
/// ### Null handling
/// - Null mask appearing in the dense path means a mask was supplied
/// to the kernel function, with a null_count of `0`. This can reflect
/// a scenario where one knew there was no nulls for a whole vector, or
/// the supplied window, and therefore supplied `0` to ensure that the
/// dense path was used for the kernel.
/// - Any `NaN` or `inf` values generated in the kernel function
/// are kept verbatim, without `nulling` them in the (optional)
/// mask, given that:
/// 1. These values can represent additional data signal.
/// 2. Handling them requires additional CPU cycles on the hot path.
///
/// Therefore, one can treat them further if needed.
#[inline(always)]
pub fn dense_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    has_mask: bool,
    scalar_body: FScalar,
) -> (Vec64<f64>, Option<Bitmask>)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);

    for &xi in x {
        out.push(scalar_body(xi));
    }

    let out_mask = if has_mask {
        Some(Bitmask::new_set_all(len, true))
    } else {
        None
    };
    (out, out_mask)
}

/// Null-aware masked kernel helper.
///
/// ### Null handling
/// - Input mask is required and propagates nulls accordingly.
/// - Null lanes are written as `NaN` and the scalar body is not called for them.
#[inline(always)]
pub fn masked_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> (Vec64<f64>, Bitmask)
where
    FScalar: Fn(f64) -> f64,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);
    let mut out_mask = mask.clone();

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(f64::NAN);
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out.push(scalar_body(xi));
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }

    (out, out_mask)
}

/// Dense kernel helper for fallible scalar bodies.
///
/// Evaluation stops at the first failing lane and its error is returned.
#[inline(always)]
pub fn try_dense_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    has_mask: bool,
    scalar_body: FScalar,
) -> Result<(Vec64<f64>, Option<Bitmask>), KernelError>
where
    FScalar: Fn(f64) -> Result<f64, KernelError>,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);

    for &xi in x {
        out.push(scalar_body(xi)?);
    }

    let out_mask = if has_mask {
        Some(Bitmask::new_set_all(len, true))
    } else {
        None
    };
    Ok((out, out_mask))
}

/// Null-aware masked kernel helper for fallible scalar bodies.
///
/// Null lanes are skipped entirely, so an invalid value hidden behind a null
/// never raises an error.
#[inline(always)]
pub fn try_masked_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    mask: &Bitmask,
    scalar_body: FScalar,
) -> Result<(Vec64<f64>, Bitmask), KernelError>
where
    FScalar: Fn(f64) -> Result<f64, KernelError>,
{
    let len = x.len();
    let mut out = Vec64::with_capacity(len);
    let mut out_mask = mask.clone();

    for idx in 0..len {
        if !unsafe { mask.get_unchecked(idx) } {
            out.push(f64::NAN);
            unsafe { out_mask.set_unchecked(idx, false) };
        } else {
            let xi = unsafe { *x.get_unchecked(idx) };
            out.push(scalar_body(xi)?);
            unsafe { out_mask.set_unchecked(idx, true) };
        }
    }

    Ok((out, out_mask))
}

/// Dispatches an infallible scalar body to the dense or masked path and wraps the
/// result in a `FloatArray`.
///
/// A non-zero `null_count` without a mask has nothing to propagate and takes the
/// dense path.
#[inline(always)]
pub fn univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> FloatArray<f64>
where
    FScalar: Fn(f64) -> f64,
{
    match null_mask {
        Some(mask) if has_nulls(null_count, null_mask) => {
            let (data, out_mask) = masked_univariate_kernel_f64_std(x, mask, scalar_body);
            FloatArray {
                data: data.into(),
                null_mask: Some(out_mask),
            }
        }
        _ => {
            let (data, out_mask) =
                dense_univariate_kernel_f64_std(x, null_mask.is_some(), scalar_body);
            FloatArray {
                data: data.into(),
                null_mask: out_mask,
            }
        }
    }
}

/// Fallible counterpart of [`univariate_kernel_f64_std`].
#[inline(always)]
pub fn try_univariate_kernel_f64_std<FScalar>(
    x: &[f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<FloatArray<f64>, KernelError>
where
    FScalar: Fn(f64) -> Result<f64, KernelError>,
{
    match null_mask {
        Some(mask) if has_nulls(null_count, null_mask) => {
            let (data, out_mask) = try_masked_univariate_kernel_f64_std(x, mask, scalar_body)?;
            Ok(FloatArray {
                data: data.into(),
                null_mask: Some(out_mask),
            })
        }
        _ => {
            let (data, out_mask) =
                try_dense_univariate_kernel_f64_std(x, null_mask.is_some(), scalar_body)?;
            Ok(FloatArray {
                data: data.into(),
                null_mask: out_mask,
            })
        }
    }
}
