//! Enhance (sharpen) filter WASM binding.

use crate::types::JsRasterImage;
use wasm_bindgen::prelude::*;

/// Sharpen an image with a 3x3 kernel, returning a new image.
///
/// `amount` is clamped to 0.0-1.0; the "Enhance" toggle uses 0.5.
#[wasm_bindgen]
pub fn sharpen(image: &JsRasterImage, amount: f32) -> JsRasterImage {
    JsRasterImage::from_raster(filmsim_core::sharpen::sharpen(image.raster(), amount))
}
