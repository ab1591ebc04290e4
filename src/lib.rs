//! # elvector Quickstart
//!
//! ```rust
//! use elvector::prelude::*;
//!
//! // Operands of different lengths zero-extend instead of erroring
//! let v = add(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
//! assert_eq!(v, vec![4.0, 6.0, 5.0]);
//!
//! // Magnitude, angle, and a polar round-trip
//! const EPS: f64 = 1e-12;
//! let a = [3.0, 4.0];
//! assert!((mag(&a) - 5.0).abs() < EPS);
//! let (r, theta) = to_polar(&a, false).unwrap();
//! let (px, py) = from_polar(r, theta);
//! assert!((px - 3.0).abs() < EPS);
//! assert!((py - 4.0).abs() < EPS);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod elementwise;
pub mod error;
pub mod measure;
pub mod polar;
pub mod prelude;
pub mod scale;
pub mod types;

// --- Public API exports ---

pub use elementwise::{add, dist, mid, sub};
pub use error::{Result, VectorError};
pub use measure::{angle, avg, component, dot, mag, prod, x, y, z};
pub use polar::{from_polar, to_polar};
pub use scale::{div, is_norm, lerp, mult, norm, scale_to};
pub use types::{Rounded, Scalar};
