//! Tone mapping from working precision to display precision.
//!
//! [`tone_map`] converts a 16-bit image to 8 bits under one of the three
//! [`Visualization`] strategies. It keeps no state between calls.

mod map;
mod visualization;

pub use map::{equalize_histogram, mask_to_image, tone_map, EQUALIZE_DOWNSCALE};
pub use visualization::Visualization;
