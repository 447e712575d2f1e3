use crate::error::CleanError;
use crate::models::ByteOrder;
use speck_removal::{Dims, Image16};
use std::path::Path;

/// Decode a headerless plane of 16-bit samples
///
/// Trailing bytes past `dims.len() * 2` are ignored with a warning; a buffer
/// that is too short is an error.
pub fn decode_raw(bytes: &[u8], dims: Dims, order: ByteOrder) -> Result<Image16, CleanError> {
    let expected = dims.len() * 2;
    if bytes.len() < expected {
        return Err(CleanError::ShortRead {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        tracing::warn!(
            expected,
            actual = bytes.len(),
            "Raw plane has trailing bytes, ignoring them"
        );
    }

    let samples: Vec<u16> = bytes[..expected]
        .chunks_exact(2)
        .map(|pair| {
            let pair = [pair[0], pair[1]];
            match order {
                ByteOrder::Little => u16::from_le_bytes(pair),
                ByteOrder::Big => u16::from_be_bytes(pair),
            }
        })
        .collect();

    Ok(Image16::new(dims.rows, dims.cols, samples)?)
}

/// Read a raw plane from disk
pub fn read_raw(path: &Path, dims: Dims, order: ByteOrder) -> Result<Image16, CleanError> {
    let bytes = std::fs::read(path)?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        %dims,
        "Read raw plane"
    );
    decode_raw(&bytes, dims, order)
}

/// Encode an image as a headerless plane (inverse of [`decode_raw`])
pub fn encode_raw(image: &Image16, order: ByteOrder) -> Vec<u8> {
    image
        .as_slice()
        .iter()
        .flat_map(|&v| match order {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        })
        .collect()
}
