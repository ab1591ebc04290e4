// src/scale.rs
//! Scalar multiplication, normalization and interpolation.

use crate::elementwise::add;
use crate::error::{Result, VectorError};
use crate::measure::mag;
use crate::types::Scalar;

/// Multiply every component by `scalar`. Never errors, any scalar
/// including 0.
pub fn mult(a: &[Scalar], scalar: Scalar) -> Vec<Scalar> {
    a.iter().map(|v| v * scalar).collect()
}

/// Divide every component by `scalar`.
///
/// The divisor is checked up front: an exactly-zero `scalar` fails with
/// [`VectorError::DivisionByZero`] instead of producing infinities.
pub fn div(a: &[Scalar], scalar: Scalar) -> Result<Vec<Scalar>> {
    if scalar == 0.0 {
        return Err(VectorError::DivisionByZero);
    }
    Ok(a.iter().map(|v| v / scalar).collect())
}

/// Normalize `a` to unit magnitude.
///
/// The zero vector has no direction: a zero magnitude surfaces as the
/// [`VectorError::DivisionByZero`] from [`div`].
pub fn norm(a: &[Scalar]) -> Result<Vec<Scalar>> {
    div(a, mag(a))
}

/// Whether `mag(a)` is exactly `1.0`.
///
/// Exact floating-point equality, no epsilon. Callers that want a
/// tolerance should compare [`mag`] themselves.
pub fn is_norm(a: &[Scalar]) -> bool {
    mag(a) == 1.0
}

/// Scale `a` to the given magnitude.
///
/// Inherits [`norm`]'s error for the zero vector.
pub fn scale_to(a: &[Scalar], scalar: Scalar) -> Result<Vec<Scalar>> {
    Ok(mult(&norm(a)?, scalar))
}

/// Linear interpolation between `a` (at `ratio` 0) and `b` (at `ratio` 1).
///
/// Ratios outside `[0, 1]` extrapolate; no range check is performed.
/// Operands of different lengths zero-extend like any other elementwise
/// pair.
pub fn lerp(a: &[Scalar], b: &[Scalar], ratio: Scalar) -> Vec<Scalar> {
    add(&mult(a, 1.0 - ratio), &mult(b, ratio))
}
