//! Owned row-major sample grids.

use crate::api::SpeckError;
use std::fmt;

/// Grid dimensions in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Number of rows (image height)
    pub rows: usize,
    /// Number of columns (image width)
    pub cols: usize,
}

impl Dims {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of samples in a grid of these dimensions.
    #[inline]
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A `rows x cols` grid of samples stored in row-major order.
///
/// Every pipeline stage takes its inputs by reference and returns a freshly
/// allocated `Image`, so no buffer is shared or mutated across stages.
///
/// # Example
///
/// ```
/// use speck_removal::Image16;
///
/// let image = Image16::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(image.get(1, 0), 4);
/// assert_eq!(image.dims().to_string(), "2x3");
///
/// assert!(Image16::new(2, 3, vec![0; 5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<T> {
    dims: Dims,
    data: Vec<T>,
}

/// 16-bit working-precision image.
pub type Image16 = Image<u16>;

/// 8-bit display-precision image.
pub type Image8 = Image<u8>;

/// Speck classification, `true` where a pixel belongs to a speck.
pub type Mask = Image<bool>;

impl<T: Copy> Image<T> {
    /// Wrap `data` as a `rows x cols` grid.
    ///
    /// Fails with [`SpeckError::BufferLength`] when `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, SpeckError> {
        let dims = Dims::new(rows, cols);
        if data.len() != dims.len() {
            return Err(SpeckError::BufferLength {
                dims,
                len: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Grid with every sample set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            dims: Dims::new(rows, cols),
            data: vec![value; rows * cols],
        }
    }

    /// Grid whose sample at `(row, col)` is `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self {
            dims: Dims::new(rows, cols),
            data,
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.dims.rows && col < self.dims.cols,
            "({}, {}) outside {} image",
            row,
            col,
            self.dims
        );
        self.data[row * self.dims.cols + col]
    }

    /// Samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One row of samples.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.dims.cols;
        &self.data[start..start + self.dims.cols]
    }

    /// Elementwise conversion into a new grid of the same dimensions.
    pub fn map<U>(&self, f: impl FnMut(T) -> U) -> Image<U> {
        Image {
            dims: self.dims,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Elementwise combination of two grids of equal dimensions.
    pub fn zip_map<U: Copy, V>(
        &self,
        other: &Image<U>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Result<Image<V>, SpeckError> {
        self.ensure_same_dims(other)?;
        Ok(Image {
            dims: self.dims,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// The grid rotated 90 degrees clockwise.
    pub fn rotate90(&self) -> Self {
        let Dims { rows, cols } = self.dims;
        Self::from_fn(cols, rows, |r, c| self.get(rows - 1 - c, r))
    }

    pub(crate) fn ensure_same_dims<U>(&self, other: &Image<U>) -> Result<(), SpeckError> {
        if self.dims != other.dims {
            return Err(SpeckError::DimensionMismatch {
                expected: self.dims,
                actual: other.dims,
            });
        }
        Ok(())
    }
}

impl<T: Copy + Ord> Image<T> {
    /// Smallest and largest sample, `None` for an empty grid.
    pub fn min_max(&self) -> Option<(T, T)> {
        let first = *self.data.first()?;
        Some(
            self.data
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

impl Image<bool> {
    /// Number of `true` cells.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&set| set).count()
    }
}
