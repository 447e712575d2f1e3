//! Test fixtures: synthetic scans written as raw planes.

use nirclean::models::ByteOrder;
use nirclean::services::encode_raw;
use speck_removal::Image16;
use std::path::{Path, PathBuf};

/// Background level of the synthetic scans
pub const BACKGROUND: u16 = 100;

/// Brightness of injected specks
pub const SPECK: u16 = 1000;

/// 9x9 flat scan with a single speck in the center
pub fn centered_speck() -> Image16 {
    Image16::from_fn(9, 9, |r, c| if (r, c) == (4, 4) { SPECK } else { BACKGROUND })
}

/// Flat scan with a few well separated specks
pub fn speckled(rows: usize, cols: usize) -> (Image16, Vec<(usize, usize)>) {
    let specks = vec![(3, 4), (rows - 4, cols - 5), (rows / 2, cols / 2)];
    let image = Image16::from_fn(rows, cols, |r, c| {
        if specks.contains(&(r, c)) {
            20_000
        } else {
            BACKGROUND
        }
    });
    (image, specks)
}

/// Write `image` as a raw plane under `dir`
pub fn write_raw(dir: &Path, name: &str, image: &Image16, order: ByteOrder) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_raw(image, order)).unwrap();
    path
}
