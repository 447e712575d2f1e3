//! Image buffers and border handling.
//!
//! [`Image`] is a plain owned grid. The aliases [`Image16`], [`Image8`] and
//! [`Mask`] name the three element types the pipeline passes between stages.

mod border;
mod buffer;

pub use border::reflect_101;
pub use buffer::{Dims, Image, Image16, Image8, Mask};
