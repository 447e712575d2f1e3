//! Border extension for neighborhood sampling.
//!
//! Every convolution in the crate samples outside the grid through
//! [`reflect_101`], so the policy is applied uniformly.

/// Map a possibly out-of-range coordinate into `0..len` by reflect-101.
///
/// The image is mirrored about its edge pixels without repeating them:
///
/// ```text
/// gfedcb | abcdefgh | gfedcba
/// ```
///
/// Offsets larger than the image fold repeatedly, so any kernel radius is
/// valid for any non-empty axis. A single-sample axis always maps to 0.
///
/// # Example
///
/// ```
/// use speck_removal::image::reflect_101;
///
/// assert_eq!(reflect_101(-1, 5), 1);
/// assert_eq!(reflect_101(5, 5), 3);
/// assert_eq!(reflect_101(2, 5), 2);
/// ```
#[inline]
pub fn reflect_101(index: isize, len: usize) -> usize {
    debug_assert!(len > 0, "cannot reflect into an empty axis");
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let folded = index.rem_euclid(period);
    if folded < len as isize {
        folded as usize
    } else {
        (period - folded) as usize
    }
}
