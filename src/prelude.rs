// src/prelude.rs
//! The “everything” import for elvector.
//!
//! Brings you the full operation set and core types with one glob:
//! ```rust
//! use elvector::prelude::*;
//! ```

// core types
pub use crate::error::{Result, VectorError};
pub use crate::types::{Rounded, Scalar};

// operations
pub use crate::elementwise::{add, dist, mid, sub};
pub use crate::measure::{angle, avg, component, dot, mag, prod, x, y, z};
pub use crate::polar::{from_polar, to_polar};
pub use crate::scale::{div, is_norm, lerp, mult, norm, scale_to};
