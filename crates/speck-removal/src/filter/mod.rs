//! Speck detection and repair.
//!
//! The pipeline runs two convolution stages with the same radial kernel:
//!
//! 1. [`detect`]: convolve the raw image and flag pixels brighter than their
//!    neighborhood estimate
//! 2. [`repair`]: re-estimate flagged pixels from their non-speck neighbors
//!    and blend the estimate into the speck locations only
//!
//! # Example
//!
//! ```
//! use speck_removal::{detect, repair, Image16, Kernel, RepairOptions};
//!
//! let raw = Image16::from_fn(9, 9, |r, c| if (r, c) == (4, 4) { 1000 } else { 100 });
//! let kernel = Kernel::new(3).unwrap();
//!
//! let detection = detect(&raw, &kernel);
//! let repaired = repair(&raw, &detection.mask, &kernel, &RepairOptions::new()).unwrap();
//!
//! assert_eq!(repaired.image.get(4, 4), 100);
//! ```

mod convolve;
mod detect;
mod kernel;
mod options;
mod repair;

pub use convolve::{convolve, saturate_u16, saturate_u8, Sample};
pub use detect::{detect, Detection};
pub use kernel::{Kernel, DEFAULT_KERNEL_SIZE};
pub use options::{DegeneratePolicy, RepairOptions};
pub use repair::{repair, Repaired};
