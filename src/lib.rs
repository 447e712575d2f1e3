//! nirclean - speck removal for near-infrared scans
//!
//! Reads headerless 16-bit planes, removes bright specks with the
//! `speck-removal` crate and writes 8-bit grayscale PNGs.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
