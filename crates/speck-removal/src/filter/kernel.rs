//! Radial-distance weighting kernel.
//!
//! The kernel scores every cell by its distance from the center, so the
//! weights grow toward the periphery and the center cell weighs nothing:
//!
//! ```text
//! size 3, before normalization
//!
//!    1.414  1.000  1.414
//!    1.000  0.000  1.000
//!    1.414  1.000  1.414
//! ```
//!
//! Convolving with it estimates each pixel from its surroundings rather than
//! from the pixel itself, which is what lets a bright outlier stand out.

use crate::api::SpeckError;

/// Default kernel side length.
pub const DEFAULT_KERNEL_SIZE: i32 = 5;

/// A normalized, radially symmetric `size x size` weighting grid.
///
/// # Invariants
///
/// - `size` is odd and positive
/// - weights sum to 1 (within `f32` rounding)
/// - `weight(r, c) == weight(c, r)` and the grid is symmetric under
///   90 degree rotation about its center
///
/// # Example
///
/// ```
/// use speck_removal::Kernel;
///
/// let kernel = Kernel::new(5).unwrap();
/// assert_eq!(kernel.size(), 5);
/// assert_eq!(kernel.weight(2, 2), 0.0);
/// assert!((kernel.sum() - 1.0).abs() < 1e-6);
///
/// assert!(Kernel::new(4).is_err());
/// assert!(Kernel::new(-1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    /// Row-major weights, `size * size` entries.
    weights: Vec<f32>,
}

impl Kernel {
    /// Build the normalized radial kernel with the given side length.
    ///
    /// A size of 1 has no distance mass to normalize; it is the identity
    /// kernel `[1.0]`.
    pub fn new(size: i32) -> Result<Self, SpeckError> {
        if size <= 0 || size % 2 != 1 {
            return Err(SpeckError::InvalidKernelSize { size });
        }
        Ok(Self::radial(size as usize))
    }

    /// Build without validation; `size` must already be odd.
    fn radial(size: usize) -> Self {
        let center = ((size - 1) / 2) as f64;

        let mut distances = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                let di = center - i as f64;
                let dj = center - j as f64;
                distances.push((di * di + dj * dj).sqrt());
            }
        }
        let total: f64 = distances.iter().sum();

        let weights = if total > 0.0 {
            distances.iter().map(|&d| (d / total) as f32).collect()
        } else {
            vec![1.0]
        };

        Self { size, weights }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center cell to the edge of the grid.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.weights[row * self.size + col]
    }

    /// Weights in row-major order.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Total kernel mass, accumulated in `f64`.
    pub fn sum(&self) -> f64 {
        self.weights.iter().map(|&w| w as f64).sum()
    }
}

impl Default for Kernel {
    fn default() -> Self {
        Self::radial(DEFAULT_KERNEL_SIZE as usize)
    }
}
