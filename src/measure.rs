// src/measure.rs
//! Component access and scalar-valued measurements.

use crate::error::{Result, VectorError};
use crate::types::Scalar;

/// Component at `index` (0, 1, 2 are the x, y, z axes).
///
/// Fails with [`VectorError::OutOfRange`] when the vector has fewer than
/// `index + 1` components.
pub fn component(a: &[Scalar], index: usize) -> Result<Scalar> {
    a.get(index)
        .copied()
        .ok_or(VectorError::OutOfRange { index, len: a.len() })
}

/// First component (X).
#[inline(always)]
pub fn x(a: &[Scalar]) -> Result<Scalar> {
    component(a, 0)
}

/// Second component (Y).
#[inline(always)]
pub fn y(a: &[Scalar]) -> Result<Scalar> {
    component(a, 1)
}

/// Third component (Z).
#[inline(always)]
pub fn z(a: &[Scalar]) -> Result<Scalar> {
    component(a, 2)
}

/// Euclidean magnitude: `sqrt(sum(a[i]²))`. Zero for the empty vector.
pub fn mag(a: &[Scalar]) -> Scalar {
    a.iter().map(|v| v * v).sum::<Scalar>().sqrt()
}

/// Angle of the vector in radians, in (−π, π].
///
/// Only the first two components matter: the angle is `atan2(a[1], a[0])`
/// with a missing second component read as 0. An empty vector has no
/// angle.
pub fn angle(a: &[Scalar]) -> Result<Scalar> {
    let ax = x(a).map_err(|_| VectorError::EmptyVector)?;
    let ay = y(a).unwrap_or(0.0);
    Ok(ay.atan2(ax))
}

/// Polar-form product `mag(a) · mag(b) · cos(angle(a) − angle(b))`.
///
/// This coincides with the textbook dot product only when the first two
/// components fully characterize the operands (2D and below). Components
/// past the second contribute to the magnitudes but not the angles, so
/// for 3D-and-up operands the result generally differs from the
/// elementwise-product sum. Fails with [`VectorError::EmptyVector`] when
/// either operand is empty.
pub fn dot(a: &[Scalar], b: &[Scalar]) -> Result<Scalar> {
    let theta = angle(a)? - angle(b)?;
    Ok(mag(a) * mag(b) * theta.cos())
}

/// Product of all components. The empty product is 1.
pub fn prod(a: &[Scalar]) -> Scalar {
    let mut total: Scalar = 1.0;
    for &v in a {
        total *= v;
        // a factor of exactly 0 pins the result
        if total == 0.0 {
            break;
        }
    }
    total
}

/// Arithmetic mean of the components.
///
/// The empty vector has no mean; the zero-length division is reported as
/// [`VectorError::DivisionByZero`].
pub fn avg(a: &[Scalar]) -> Result<Scalar> {
    if a.is_empty() {
        return Err(VectorError::DivisionByZero);
    }
    Ok(a.iter().sum::<Scalar>() / a.len() as Scalar)
}
