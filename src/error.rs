// src/error.rs
//! Error types for vector operations.

use std::fmt;

/// Error types for vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Component index past the end of the vector
    OutOfRange { index: usize, len: usize },
    /// The operation needs at least one component
    EmptyVector,
    /// Divisor (scalar, magnitude or length) was exactly zero
    DivisionByZero,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::OutOfRange { index, len } => {
                write!(f, "component {} out of range for vector of length {}", index, len)
            }
            VectorError::EmptyVector => write!(f, "empty vector"),
            VectorError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
