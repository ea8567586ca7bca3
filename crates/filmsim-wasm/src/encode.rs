//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_jpeg`] - Encode RGBA pixel data to JPEG bytes (alpha dropped)
//! - [`encode_png`] - Encode RGBA pixel data to PNG bytes
//! - [`encode_jpeg_from_image`] - Encode a JsRasterImage to JPEG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg } from '@filmsim/wasm';
//!
//! const jpegBytes = encode_jpeg(imageData.data, width, height, 95);
//! const blob = new Blob([jpegBytes], { type: 'image/jpeg' });
//! ```

use crate::types::JsRasterImage;
use filmsim_core::{encode, RasterImage};
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, export default: 95)
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    let raster = RasterImage::new(width, height, pixels.to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode::encode_jpeg(&raster, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGBA pixel data to PNG bytes, alpha included.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    let raster = RasterImage::new(width, height, pixels.to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode::encode_png(&raster).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsRasterImage to JPEG bytes.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.raster(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Note: the binding functions return `Result<T, JsValue>`, which only works
/// on wasm32 targets. The underlying encoders are covered in
/// `filmsim_core::encode`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_encodes_to_valid_jpeg() {
        let src = RasterImage::filled(10, 10, [128, 128, 128, 255]).unwrap();
        let img = JsRasterImage::from_raster(src);
        let jpeg = encode::encode_jpeg(img.raster(), 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
