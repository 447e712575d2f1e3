use crate::error::CleanError;
use speck_removal::Image8;
use std::io::Cursor;
use std::path::Path;

/// Encode an 8-bit image as a grayscale PNG.
///
/// With `optimize`, the PNG is re-compressed losslessly with oxipng. A failed
/// re-compression is logged and the plain encoding is returned instead.
pub fn encode_grayscale_png(image: &Image8, optimize: bool) -> Result<Vec<u8>, CleanError> {
    let width = u32::try_from(image.cols())
        .map_err(|_| CleanError::PngEncode(format!("width {} too large", image.cols())))?;
    let height = u32::try_from(image.rows())
        .map_err(|_| CleanError::PngEncode(format!("height {} too large", image.rows())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        // Fast settings when oxipng re-compresses afterwards
        if optimize {
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| CleanError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.as_slice())
            .map_err(|e| CleanError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !optimize {
        return Ok(png_bytes);
    }

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(error = %e, "PNG optimization failed, keeping plain encoding");
            Ok(png_bytes)
        }
    }
}

/// Encode `image` and write it to `path`.
pub fn write_grayscale_png(path: &Path, image: &Image8, optimize: bool) -> Result<(), CleanError> {
    let bytes = encode_grayscale_png(image, optimize)?;
    std::fs::write(path, &bytes)?;
    tracing::info!(
        path = %path.display(),
        bytes = bytes.len(),
        dims = %image.dims(),
        "Wrote PNG"
    );
    Ok(())
}
