//! Unified error type for the speck-removal public API.
//!
//! [`SpeckError`] covers every contract violation the core can report.
//! None of them are retried or recovered internally.

use crate::image::Dims;
use std::fmt;

/// Error type for kernel construction, buffer validation and repair.
///
/// # Example
///
/// ```
/// use speck_removal::{Kernel, SpeckError};
///
/// let err = Kernel::new(4).unwrap_err();
/// assert_eq!(err, SpeckError::InvalidKernelSize { size: 4 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SpeckError {
    /// Kernel side length is even or not positive
    InvalidKernelSize {
        /// The rejected side length
        size: i32,
    },
    /// Repair normalization scale is NaN, infinite or not positive
    InvalidNormalization {
        /// The rejected scale
        scale: f64,
    },
    /// Two grids that must share dimensions do not
    DimensionMismatch {
        /// Dimensions of the reference image
        expected: Dims,
        /// Dimensions of the offending grid
        actual: Dims,
    },
    /// A buffer's sample count does not equal `rows * cols`
    BufferLength {
        /// Declared dimensions
        dims: Dims,
        /// Number of samples supplied
        len: usize,
    },
    /// A speck pixel has no non-speck neighbor inside the kernel footprint
    DegenerateNeighborhood {
        /// Row of the first degenerate pixel (row-major order)
        row: usize,
        /// Column of the first degenerate pixel
        col: usize,
    },
}

impl fmt::Display for SpeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeckError::InvalidKernelSize { size } => {
                write!(f, "invalid kernel size {} (must be odd and positive)", size)
            }
            SpeckError::InvalidNormalization { scale } => {
                write!(
                    f,
                    "invalid normalization {} (must be finite and positive)",
                    scale
                )
            }
            SpeckError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            SpeckError::BufferLength { dims, len } => {
                write!(
                    f,
                    "buffer holds {} samples but {} requires {}",
                    len,
                    dims,
                    dims.len()
                )
            }
            SpeckError::DegenerateNeighborhood { row, col } => {
                write!(
                    f,
                    "speck at ({}, {}) has no non-speck neighbors within the kernel",
                    row, col
                )
            }
        }
    }
}

impl std::error::Error for SpeckError {}
