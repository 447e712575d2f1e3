//! Masked re-blending of speck pixels.
//!
//! Speck pixels are replaced by a weighted average of the non-speck pixels
//! around them:
//!
//! ```text
//! non_speck   = raw where !mask, 0 where mask
//! inv_mask    = 1   where !mask, 0 where mask
//!
//! numerator   = non_speck (*) kernel      weighted sum of genuine neighbors
//! denominator = inv_mask  (*) kernel      weight those neighbors carry
//!
//! estimate    = numerator / denominator * normalization
//! output      = mask ? estimate : raw
//! ```
//!
//! Dividing by the denominator re-normalizes the kernel over the neighbors
//! that survived masking, so a speck inside a cluster of specks is still
//! estimated from clean pixels only.

use super::convolve::{convolve, saturate_u16};
use super::kernel::Kernel;
use super::options::{DegeneratePolicy, RepairOptions};
use crate::api::SpeckError;
use crate::image::{Image, Image16, Mask};

/// Denominators at or below this are treated as empty neighborhoods.
const MIN_NEIGHBOR_WEIGHT: f64 = f64::EPSILON;

/// Result of [`repair`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repaired {
    /// Output image, same dimensions as the input.
    pub image: Image16,
    /// Speck pixels replaced by their neighborhood estimate.
    pub repaired: usize,
    /// Speck pixels left at their raw value because no non-speck neighbor
    /// was in reach (only under [`DegeneratePolicy::RetainRaw`]).
    pub degenerate: usize,
}

/// Replace speck pixels with their masked neighborhood estimate.
///
/// Non-speck pixels are copied through bit-for-bit.
///
/// # Errors
///
/// - [`SpeckError::InvalidNormalization`] if `options.normalization` is NaN,
///   infinite or not positive
/// - [`SpeckError::DimensionMismatch`] if `mask` and `raw` differ in size
/// - [`SpeckError::DegenerateNeighborhood`] for the first (row-major) speck
///   with zero neighbor weight, when `options.degenerate` is
///   [`DegeneratePolicy::Fail`]
///
/// # Example
///
/// ```
/// use speck_removal::{repair, Image16, Kernel, Mask, RepairOptions};
///
/// let raw = Image16::from_fn(5, 5, |r, c| if (r, c) == (2, 2) { 900 } else { 100 });
/// let mask = Mask::from_fn(5, 5, |r, c| (r, c) == (2, 2));
///
/// let out = repair(&raw, &mask, &Kernel::new(3).unwrap(), &RepairOptions::new()).unwrap();
/// assert_eq!(out.image.get(2, 2), 100);
/// assert_eq!(out.image.get(0, 0), 100);
/// assert_eq!(out.repaired, 1);
/// ```
pub fn repair(
    raw: &Image16,
    mask: &Mask,
    kernel: &Kernel,
    options: &RepairOptions,
) -> Result<Repaired, SpeckError> {
    options.validate()?;
    let non_speck = raw.zip_map(mask, |v, speck| if speck { 0 } else { v })?;
    let inv_mask: Image<f64> = mask.map(|speck| if speck { 0.0 } else { 1.0 });

    let numerator = convolve(&non_speck, kernel);
    let denominator = convolve(&inv_mask, kernel);

    let mut data = Vec::with_capacity(raw.dims().len());
    let mut repaired = 0;
    let mut degenerate = 0;
    for r in 0..raw.rows() {
        for c in 0..raw.cols() {
            let value = raw.get(r, c);
            if !mask.get(r, c) {
                data.push(value);
                continue;
            }
            let weight = denominator.get(r, c);
            if weight <= MIN_NEIGHBOR_WEIGHT {
                match options.degenerate {
                    DegeneratePolicy::RetainRaw => {
                        degenerate += 1;
                        data.push(value);
                    }
                    DegeneratePolicy::Fail => {
                        return Err(SpeckError::DegenerateNeighborhood { row: r, col: c });
                    }
                }
                continue;
            }
            let estimate = numerator.get(r, c) / weight * options.normalization;
            repaired += 1;
            data.push(saturate_u16(estimate));
        }
    }

    Ok(Repaired {
        image: Image16::new(raw.rows(), raw.cols(), data)?,
        repaired,
        degenerate,
    })
}
