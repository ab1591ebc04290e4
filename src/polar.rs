// src/polar.rs
//! Conversion between rectangular and polar form.

use crate::error::Result;
use crate::measure::{angle, mag};
use crate::types::Scalar;

/// Polar representation `(magnitude, angle)` of a vector.
///
/// The angle always comes from the first two components. With
/// `full_magnitude` the magnitude covers every component; otherwise it
/// covers the first two only. An empty vector propagates [`angle`]'s
/// error.
pub fn to_polar(a: &[Scalar], full_magnitude: bool) -> Result<(Scalar, Scalar)> {
    let head = &a[..a.len().min(2)];
    let m = if full_magnitude { mag(a) } else { mag(head) };
    Ok((m, angle(head)?))
}

/// Rectangular `(x, y)` pair from a polar radius and angle in radians.
/// Never errors.
pub fn from_polar(radius: Scalar, theta: Scalar) -> (Scalar, Scalar) {
    (radius * theta.cos(), radius * theta.sin())
}
