//! PNG encoding for lossless export.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_dimensions, EncodeError};
use crate::raster::RasterImage;

/// Encode a raster to PNG bytes, alpha included.
pub fn encode_png(raster: &RasterImage) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(raster)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            raster.pixels(),
            raster.width(),
            raster.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed {
            format: "PNG",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}
