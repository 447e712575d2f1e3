//! 16-bit to 8-bit conversion.

use super::visualization::Visualization;
use crate::filter::saturate_u8;
use crate::image::{Image16, Image8, Mask};

/// Divisor applied before histogram equalization.
pub const EQUALIZE_DOWNSCALE: f64 = 256.0;

/// Convert a 16-bit image to 8-bit display values.
///
/// Stateless: every call derives whatever statistics it needs from `image`.
///
/// A constant image under [`Visualization::NormalizeMinMax`] has no range to
/// stretch and maps to all zeros.
///
/// # Example
///
/// ```
/// use speck_removal::{tone_map, Image16, Visualization};
///
/// let image = Image16::new(1, 3, vec![1000, 2000, 3000]).unwrap();
///
/// let stretched = tone_map(&image, Visualization::NormalizeMinMax);
/// assert_eq!(stretched.as_slice(), &[0, 128, 255]);
///
/// let clamped = tone_map(&image, Visualization::SaturateCast);
/// assert_eq!(clamped.as_slice(), &[255, 255, 255]);
/// ```
pub fn tone_map(image: &Image16, mode: Visualization) -> Image8 {
    match mode {
        Visualization::SaturateCast => image.map(|v| v.min(u8::MAX as u16) as u8),
        Visualization::NormalizeMinMax => normalize_min_max(image),
        Visualization::EqualizeHistogram => equalize_histogram(&image.map(downscale)),
    }
}

/// 16-bit sample to 8 bits by the fixed 1/256 factor, ties to even.
fn downscale(value: u16) -> u8 {
    saturate_u8(value as f64 / EQUALIZE_DOWNSCALE)
}

fn normalize_min_max(image: &Image16) -> Image8 {
    let Some((lo, hi)) = image.min_max() else {
        return image.map(|_| 0);
    };
    if lo == hi {
        return image.map(|_| 0);
    }
    let scale = u8::MAX as f64 / (hi - lo) as f64;
    image.map(|v| saturate_u8((v - lo) as f64 * scale))
}

/// Spread 8-bit intensities so their cumulative histogram is roughly linear.
///
/// The darkest occupied level maps to 0 and the brightest to 255. An image
/// holding a single level is returned unchanged.
pub fn equalize_histogram(image: &Image8) -> Image8 {
    let mut hist = [0usize; 256];
    for &v in image.as_slice() {
        hist[v as usize] += 1;
    }
    let total = image.as_slice().len();

    let Some(lo) = hist.iter().position(|&n| n > 0) else {
        return image.clone();
    };
    if hist[lo] == total {
        return image.clone();
    }

    let scale = u8::MAX as f64 / (total - hist[lo]) as f64;
    let mut lut = [0u8; 256];
    let mut cumulative = 0usize;
    for level in lo + 1..256 {
        cumulative += hist[level];
        lut[level] = saturate_u8(cumulative as f64 * scale);
    }
    image.map(|v| lut[v as usize])
}

/// Render a speck mask for display: specks white, background black.
pub fn mask_to_image(mask: &Mask) -> Image8 {
    mask.map(|speck| if speck { u8::MAX } else { 0 })
}
