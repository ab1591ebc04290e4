// tests/measure_tests.rs

use elvector::error::VectorError;
use elvector::measure::{angle, avg, component, dot, mag, prod, x, y, z};
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-12;

#[test]
fn test_component_access() {
    let v = [1.0, 2.0, 3.0];
    assert_eq!(component(&v, 1), Ok(2.0));
    assert_eq!(x(&v), Ok(1.0));
    assert_eq!(y(&v), Ok(2.0));
    assert_eq!(z(&v), Ok(3.0));
}

#[test]
fn test_component_out_of_range() {
    assert_eq!(
        component(&[1.0, 2.0, 3.0], 3),
        Err(VectorError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(z(&[1.0, 2.0]), Err(VectorError::OutOfRange { index: 2, len: 2 }));
}

#[test]
fn test_mag() {
    assert!((mag(&[3.0, 4.0]) - 5.0).abs() < EPS);
    // mag ignores nothing: all components count
    assert!((mag(&[2.0, 3.0, 6.0]) - 7.0).abs() < EPS);
    assert_eq!(mag(&[]), 0.0);
}

#[test]
fn test_angle_axes() {
    assert_eq!(angle(&[1.0, 0.0]), Ok(0.0));
    assert!((angle(&[0.0, 1.0]).unwrap() - FRAC_PI_2).abs() < EPS);
    assert!((angle(&[-1.0, 0.0]).unwrap() - PI).abs() < EPS);
}

#[test]
fn test_angle_short_and_long_vectors() {
    // a single component reads the missing Y as 0
    assert_eq!(angle(&[2.0]), Ok(0.0));
    assert!((angle(&[-3.0]).unwrap() - PI).abs() < EPS);
    // components past the second are ignored
    let a = angle(&[1.0, 1.0]).unwrap();
    let b = angle(&[1.0, 1.0, 9.0, -4.0]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_angle_empty() {
    assert_eq!(angle(&[]), Err(VectorError::EmptyVector));
}

#[test]
fn test_dot_matches_textbook_in_2d() {
    // 1*3 + 2*4 = 11
    assert!((dot(&[1.0, 2.0], &[3.0, 4.0]).unwrap() - 11.0).abs() < EPS);
    // orthogonal axes
    assert!(dot(&[1.0, 0.0], &[0.0, 1.0]).unwrap().abs() < EPS);
}

#[test]
fn test_dot_uses_planar_angles_beyond_2d() {
    // both operands point along X in the plane, so the cosine term is 1
    // and the result is the product of the full magnitudes: sqrt(2) * 1,
    // not the elementwise sum (which would be 1)
    let d = dot(&[1.0, 0.0, 1.0], &[1.0, 0.0, 0.0]).unwrap();
    assert!((d - 2.0_f64.sqrt()).abs() < EPS);
}

#[test]
fn test_dot_empty_operand() {
    assert_eq!(dot(&[], &[1.0]), Err(VectorError::EmptyVector));
    assert_eq!(dot(&[1.0], &[]), Err(VectorError::EmptyVector));
}

#[test]
fn test_prod() {
    assert_eq!(prod(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(prod(&[2.0, 0.0, 5.0]), 0.0);
    // empty product
    assert_eq!(prod(&[]), 1.0);
}

#[test]
fn test_avg() {
    assert_eq!(avg(&[1.0, 2.0, 3.0]), Ok(2.0));
    assert_eq!(avg(&[5.0]), Ok(5.0));
    assert_eq!(avg(&[]), Err(VectorError::DivisionByZero));
}
