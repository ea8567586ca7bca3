//! JPEG encoding for export.
//!
//! JPEG has no alpha channel, so alpha is dropped before encoding.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_dimensions, EncodeError};
use crate::raster::RasterImage;

/// Export quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Encode a raster to JPEG bytes.
///
/// # Arguments
///
/// * `raster` - The image to encode
/// * `quality` - JPEG quality, clamped to 1-100
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty raster and
/// `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_jpeg(raster: &RasterImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(raster)?;

    let quality = quality.clamp(1, 100);
    let rgb = raster.to_rgb_bytes();

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, raster.width(), raster.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "JPEG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
