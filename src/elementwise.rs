// src/elementwise.rs
//! Elementwise binary operations over zero-extended operand pairs.

use crate::types::Scalar;

/// Pair two slices out to the length of the longer one, reading `0.0` for
/// components the shorter operand does not have.
///
/// Every elementwise binary operation is defined through this helper.
fn zip_fill<'a>(
    a: &'a [Scalar],
    b: &'a [Scalar],
) -> impl Iterator<Item = (Scalar, Scalar)> + 'a {
    let n = a.len().max(b.len());
    (0..n).map(move |i| {
        (
            a.get(i).copied().unwrap_or(0.0),
            b.get(i).copied().unwrap_or(0.0),
        )
    })
}

/// Elementwise sum of two vectors.
///
/// The result has `max(a.len(), b.len())` components; a length mismatch is
/// never an error.
pub fn add(a: &[Scalar], b: &[Scalar]) -> Vec<Scalar> {
    zip_fill(a, b).map(|(x, y)| x + y).collect()
}

/// Elementwise difference `a - b`, zero-extending the shorter operand.
pub fn sub(a: &[Scalar], b: &[Scalar]) -> Vec<Scalar> {
    zip_fill(a, b).map(|(x, y)| x - y).collect()
}

/// Elementwise midpoint of `a` and `b`.
///
/// A `None` second operand stands for the one-component zero vector `[0]`:
/// `mid(a, None)` averages component 0 of `a` against zero and, through
/// the zero-extension rule, halves every component after it.
pub fn mid(a: &[Scalar], b: Option<&[Scalar]>) -> Vec<Scalar> {
    let b = b.unwrap_or(&[0.0]);
    zip_fill(a, b).map(|(x, y)| (x + y) / 2.0).collect()
}

/// Euclidean distance between two points, over the zero-extended length.
///
/// Two empty vectors are at distance 0.
pub fn dist(a: &[Scalar], b: &[Scalar]) -> Scalar {
    zip_fill(a, b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<Scalar>()
        .sqrt()
}
