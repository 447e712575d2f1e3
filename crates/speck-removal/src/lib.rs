#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! speck-removal: bright-speck detection and repair for 16-bit sensor imagery
//!
//! This library removes localized bright artifacts ("specks") from
//! single-channel 16-bit images such as near-infrared scans, then converts
//! the result to 8 bits for display.
//!
//! # Quick Start
//!
//! The [`SpeckRemover`] builder is the primary entry point:
//!
//! ```
//! use speck_removal::{tone_map, Image16, SpeckRemover, Visualization};
//!
//! let raw = Image16::from_fn(16, 16, |r, c| if (r, c) == (7, 9) { 4000 } else { 120 });
//!
//! let remover = SpeckRemover::new();
//! let result = remover.process(raw).unwrap();
//! assert_eq!(result.repaired.get(7, 9), 120);
//!
//! let display = tone_map(&result.repaired, Visualization::default());
//! assert_eq!(display.dims(), result.repaired.dims());
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! raw (u16)
//!     |
//!     +---> convolve with radial kernel ---> convolved (u16)
//!     |                                          |
//!     +------------ compare: convolved < raw ----+
//!     |                     |
//!     |                   mask (bool)
//!     |                     |
//!     +---> blank specks ---+---> inverse mask (0/1)
//!     |         |                     |
//!     |    convolve (numerator)  convolve (denominator)
//!     |         |                     |
//!     |         +---- divide ---------+
//!     |                |
//!     |            estimate
//!     |                |
//!     +---- mask ? estimate : raw
//!                      |
//!                 repaired (u16)
//!                      |
//!                 tone_map ---> display (u8)
//! ```
//!
//! # The Radial Kernel
//!
//! [`Kernel`] weighs each cell by its Euclidean distance from the center,
//! normalized to unit mass. The center cell weighs zero and the corners the
//! most, so the convolution is an estimate built from the surroundings. A
//! pixel brighter than that estimate is classified as a speck.
//!
//! The same kernel drives the repair. Dividing the convolution of the
//! speck-blanked image by the convolution of the inverse mask re-normalizes
//! the kernel over the clean neighbors actually present, so clusters of
//! specks are estimated from clean pixels only.
//!
//! # Borders
//!
//! Every convolution extends the image by reflect-101 (see
//! [`image::reflect_101`]).
//!
//! # Degenerate Neighborhoods
//!
//! A speck whose kernel footprint holds no clean pixel has nothing to
//! average. [`DegeneratePolicy`] decides whether it keeps its raw value
//! (the default, counted in [`SpeckRemoval::degenerate`]) or aborts the
//! repair with [`SpeckError::DegenerateNeighborhood`].
//!
//! # Tone Mapping
//!
//! [`tone_map`] converts the 16-bit result for display:
//!
//! - [`Visualization::SaturateCast`]: clamp to 255
//! - [`Visualization::NormalizeMinMax`] (default): stretch `[min, max]` onto
//!   `[0, 255]`; a constant image maps to all zeros
//! - [`Visualization::EqualizeHistogram`]: divide by 256, then equalize

pub mod api;
pub mod filter;
pub mod image;
pub mod tone;


pub use api::{SpeckError, SpeckRemoval, SpeckRemover};
pub use filter::{
    convolve, detect, repair, DegeneratePolicy, Detection, Kernel, RepairOptions, Repaired,
    DEFAULT_KERNEL_SIZE,
};
pub use image::{Dims, Image, Image16, Image8, Mask};
pub use tone::{mask_to_image, tone_map, Visualization};
