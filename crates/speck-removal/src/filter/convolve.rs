//! Same-size 2D convolution with reflect-101 borders.

use super::kernel::Kernel;
use crate::image::{reflect_101, Image};

/// Sample types that can be read as `f64` for accumulation.
pub trait Sample: Copy {
    fn to_f64(self) -> f64;
}

impl Sample for u8 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for u16 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Convolve `image` with `kernel`, producing a grid of the same size.
///
/// Each output sample is the kernel-weighted sum over the `size x size`
/// neighborhood centered on it. Coordinates falling outside the image are
/// resolved with [`reflect_101`]. The kernel is radially symmetric, so
/// correlation and convolution coincide.
///
/// Accumulation is in `f64` and the result is left unrounded; callers decide
/// how to quantize.
pub fn convolve<T: Sample>(image: &Image<T>, kernel: &Kernel) -> Image<f64> {
    let rows = image.rows();
    let cols = image.cols();
    let size = kernel.size();
    let radius = kernel.radius() as isize;
    let src = image.as_slice();
    let weights = kernel.weights();

    // Precompute the reflected column index for every (col, kx) pair; the
    // row offsets are resolved once per output row.
    let col_taps: Vec<usize> = (0..cols)
        .flat_map(|c| {
            (0..size).map(move |kx| reflect_101(c as isize + kx as isize - radius, cols))
        })
        .collect();

    let mut row_taps = vec![0usize; size];
    Image::from_fn(rows, cols, |r, c| {
        if c == 0 {
            for (ky, tap) in row_taps.iter_mut().enumerate() {
                *tap = reflect_101(r as isize + ky as isize - radius, rows) * cols;
            }
        }
        let taps = &col_taps[c * size..(c + 1) * size];
        let mut acc = 0.0f64;
        for (ky, &row_start) in row_taps.iter().enumerate() {
            let kernel_row = &weights[ky * size..(ky + 1) * size];
            for (&w, &col) in kernel_row.iter().zip(taps) {
                acc += w as f64 * src[row_start + col].to_f64();
            }
        }
        acc
    })
}

/// Round to nearest, ties to even, and clamp into the `u16` range.
///
/// Ties go to the even neighbor (`2.5 -> 2`, `3.5 -> 4`), the same rounding
/// OpenCV's saturating casts use. NaN maps to 0.
#[inline]
pub fn saturate_u16(value: f64) -> u16 {
    if value.is_nan() {
        return 0;
    }
    value.round_ties_even().clamp(0.0, u16::MAX as f64) as u16
}

/// Round to nearest, ties to even, and clamp into the `u8` range.
#[inline]
pub fn saturate_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round_ties_even().clamp(0.0, u8::MAX as f64) as u8
}
