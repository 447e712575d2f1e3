//! Speck detection.
//!
//! A pixel is a speck when its raw value exceeds the radially weighted
//! estimate of its neighborhood.

use super::convolve::{convolve, saturate_u16};
use super::kernel::Kernel;
use crate::image::{Image16, Mask};

/// Result of [`detect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Neighborhood estimate, quantized to the 16-bit working precision.
    pub convolved: Image16,
    /// `true` where `convolved < raw`.
    pub mask: Mask,
}

impl Detection {
    /// Number of pixels classified as specks.
    #[inline]
    pub fn speck_count(&self) -> usize {
        self.mask.count_set()
    }
}

/// Convolve `raw` with `kernel` and flag pixels brighter than their estimate.
///
/// The estimate is rounded to nearest (ties to even) and saturated to `u16`
/// before the comparison, so the mask is reproducible from `convolved` alone.
///
/// # Example
///
/// ```
/// use speck_removal::{detect, Image16, Kernel};
///
/// let mut data = vec![100u16; 25];
/// data[12] = 1000;
/// let raw = Image16::new(5, 5, data).unwrap();
///
/// let detection = detect(&raw, &Kernel::new(3).unwrap());
/// assert_eq!(detection.speck_count(), 1);
/// assert!(detection.mask.get(2, 2));
/// ```
pub fn detect(raw: &Image16, kernel: &Kernel) -> Detection {
    let convolved = convolve(raw, kernel).map(saturate_u16);
    let mask = Mask::from_fn(raw.rows(), raw.cols(), |r, c| {
        convolved.get(r, c) < raw.get(r, c)
    });
    Detection { convolved, mask }
}
