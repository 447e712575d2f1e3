pub mod grayscale_png;

pub use grayscale_png::{encode_grayscale_png, write_grayscale_png};
