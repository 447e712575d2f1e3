//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

/// Decoded 8-bit grayscale PNG
pub struct GrayPng {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Assert the file is an 8-bit grayscale PNG and decode it
pub fn assert_gray_png(path: &Path) -> GrayPng {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {}", path.display(), e));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().unwrap();
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).unwrap();
    data.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    GrayPng {
        width: info.width,
        height: info.height,
        data,
    }
}

/// Decode any PNG to one 8-bit gray sample per pixel
///
/// oxipng may store a re-compressed image as low bit depth gray or as a
/// palette, so the image is expanded first and the first channel kept.
pub fn decode_gray_samples(path: &Path) -> GrayPng {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected PNG at {}: {}", path.display(), e));
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    let (color, depth) = reader.output_color_type();
    assert_eq!(depth, png::BitDepth::Eight, "Expected 8-bit samples after EXPAND");
    let channels = match color {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => panic!("EXPAND should resolve the palette"),
    };

    GrayPng {
        width: info.width,
        height: info.height,
        data: buf.chunks(channels).map(|px| px[0]).collect(),
    }
}
