//! SpeckRemover builder -- the primary ergonomic entry point for the crate.
//!
//! [`SpeckRemover`] owns the kernel and repair options and runs detection
//! and repair over one image per call.

use super::SpeckError;
use crate::filter::{detect, repair, DegeneratePolicy, Kernel, RepairOptions};
use crate::image::{Image16, Mask};

/// Everything one pass of [`SpeckRemover::process`] produces.
///
/// The raw input is handed back next to the repaired output so callers can
/// visualize both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeckRemoval {
    /// The input image, unchanged.
    pub raw: Image16,
    /// Neighborhood estimate used for detection.
    pub convolved: Image16,
    /// Speck classification.
    pub mask: Mask,
    /// Output with speck pixels replaced.
    pub repaired: Image16,
    /// Specks left at their raw value for lack of clean neighbors.
    pub degenerate: usize,
}

impl SpeckRemoval {
    /// Number of pixels classified as specks.
    #[inline]
    pub fn speck_count(&self) -> usize {
        self.mask.count_set()
    }
}

/// High-level speck removal builder.
///
/// # Design
///
/// - The kernel is built once, at construction, and reused for every
///   convolution pass of every image
/// - Configuration methods consume and return `self`
/// - [`process()`](Self::process) takes `&self` so the builder is reusable
///
/// # Example
///
/// ```
/// use speck_removal::{Image16, SpeckRemover};
///
/// let remover = SpeckRemover::with_kernel_size(3).unwrap();
///
/// let raw = Image16::from_fn(9, 9, |r, c| if (r, c) == (4, 4) { 1000 } else { 100 });
/// let result = remover.process(raw).unwrap();
///
/// assert_eq!(result.speck_count(), 1);
/// assert_eq!(result.repaired, Image16::filled(9, 9, 100));
/// assert_eq!(result.raw.get(4, 4), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct SpeckRemover {
    kernel: Kernel,
    options: RepairOptions,
}

impl Default for SpeckRemover {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeckRemover {
    /// Create a remover with the default kernel size (5) and repair options.
    pub fn new() -> Self {
        Self {
            kernel: Kernel::default(),
            options: RepairOptions::default(),
        }
    }

    /// Create a remover with a custom kernel size.
    ///
    /// Fails with [`SpeckError::InvalidKernelSize`] for even or non-positive
    /// sizes.
    pub fn with_kernel_size(size: i32) -> Result<Self, SpeckError> {
        Ok(Self {
            kernel: Kernel::new(size)?,
            options: RepairOptions::default(),
        })
    }

    /// Set the estimate normalization scale.
    #[inline]
    pub fn normalization(mut self, scale: f64) -> Self {
        self.options = self.options.normalization(scale);
        self
    }

    /// Set the degenerate-neighborhood policy.
    #[inline]
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.options = self.options.degenerate(policy);
        self
    }

    #[inline]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    #[inline]
    pub fn options(&self) -> &RepairOptions {
        &self.options
    }

    /// Detect and repair specks in `raw`.
    ///
    /// Applies the full pipeline:
    /// 1. Convolve and derive the speck mask
    /// 2. Re-estimate speck pixels from their non-speck neighbors
    pub fn process(&self, raw: Image16) -> Result<SpeckRemoval, SpeckError> {
        let detection = detect(&raw, &self.kernel);
        let repaired = repair(&raw, &detection.mask, &self.kernel, &self.options)?;
        Ok(SpeckRemoval {
            raw,
            convolved: detection.convolved,
            mask: detection.mask,
            repaired: repaired.image,
            degenerate: repaired.degenerate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_size_five() {
        let remover = SpeckRemover::new();
        assert_eq!(remover.kernel().size(), 5);
        assert_eq!(remover.options(), &RepairOptions::default());
    }

    #[test]
    fn test_with_kernel_size_rejects_even() {
        let err = SpeckRemover::with_kernel_size(6).unwrap_err();
        assert_eq!(err, SpeckError::InvalidKernelSize { size: 6 });
    }

    #[test]
    fn test_builder_chaining() {
        let remover = SpeckRemover::with_kernel_size(7)
            .unwrap()
            .normalization(2.0)
            .degenerate_policy(DegeneratePolicy::Fail);
        assert_eq!(remover.kernel().size(), 7);
        assert_eq!(remover.options().normalization, 2.0);
        assert_eq!(remover.options().degenerate, DegeneratePolicy::Fail);
    }

    #[test]
    fn test_process_is_reusable() {
        let remover = SpeckRemover::with_kernel_size(3).unwrap();
        let a = Image16::from_fn(6, 6, |r, c| if (r, c) == (2, 3) { 900 } else { 90 });
        let b = Image16::filled(6, 6, 90);

        let first = remover.process(a).unwrap();
        let second = remover.process(b.clone()).unwrap();

        assert_eq!(first.speck_count(), 1);
        assert_eq!(second.speck_count(), 0);
        assert_eq!(second.repaired, b);
    }

    #[test]
    fn test_process_exposes_intermediates() {
        let remover = SpeckRemover::new();
        let raw = Image16::from_fn(10, 10, |r, c| ((r * 31 + c * 17) % 300 + 50) as u16);
        let result = remover.process(raw.clone()).unwrap();

        let detection = detect(&raw, remover.kernel());
        assert_eq!(result.convolved, detection.convolved);
        assert_eq!(result.mask, detection.mask);
        assert_eq!(result.raw, raw);
    }
}
