//! Color adjustment WASM bindings.
//!
//! This module provides JavaScript bindings for the `Adjustments` recipe,
//! allowing film recipes to be built or inspected from TypeScript and applied
//! to an image.

use crate::catalog::builtin;
use crate::types::JsRasterImage;
use filmsim_core::adjustments as engine;
use filmsim_core::Adjustments;
use wasm_bindgen::prelude::*;

/// Color recipe wrapper for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsAdjustments {
    inner: Adjustments,
}

#[wasm_bindgen]
impl JsAdjustments {
    /// Create the identity recipe
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Adjustments::IDENTITY,
        }
    }

    /// Brightness factor (1.0 = unchanged)
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Contrast factor around mid-gray (1.0 = unchanged)
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Saturation factor (1.0 = unchanged, 0.0 = gray)
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Grayscale amount (0.0 to 1.0)
    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> f32 {
        self.inner.grayscale
    }

    #[wasm_bindgen(setter)]
    pub fn set_grayscale(&mut self, value: f32) {
        self.inner.grayscale = value;
    }

    /// Sepia amount (0.0 to 1.0)
    #[wasm_bindgen(getter)]
    pub fn sepia(&self) -> f32 {
        self.inner.sepia
    }

    #[wasm_bindgen(setter)]
    pub fn set_sepia(&mut self, value: f32) {
        self.inner.sepia = value;
    }

    /// Hue rotation in degrees
    #[wasm_bindgen(getter)]
    pub fn hue_rotate(&self) -> f32 {
        self.inner.hue_rotate
    }

    #[wasm_bindgen(setter)]
    pub fn set_hue_rotate(&mut self, value: f32) {
        self.inner.hue_rotate = value;
    }

    /// Check if the recipe leaves every pixel untouched
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Serialize to a plain JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from a plain JS object; missing fields are identity
    pub fn from_json(value: JsValue) -> Result<JsAdjustments, JsValue> {
        let inner: Adjustments =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl JsAdjustments {
    pub(crate) fn inner(&self) -> &Adjustments {
        &self.inner
    }
}

/// Apply a recipe to an image, returning a new image.
///
/// # Example (TypeScript)
/// ```typescript
/// const adj = new JsAdjustments();
/// adj.grayscale = 1.0;
/// adj.contrast = 1.2;
///
/// const adjusted = apply_adjustments(sourceImage, adj);
/// ```
#[wasm_bindgen]
pub fn apply_adjustments(image: &JsRasterImage, adjustments: &JsAdjustments) -> JsRasterImage {
    JsRasterImage::from_raster(engine::apply_adjustments(
        image.raster(),
        adjustments.inner(),
    ))
}

/// Apply a built-in preset to an image.
///
/// An unknown id leaves the image unchanged.
#[wasm_bindgen]
pub fn apply_preset(image: &JsRasterImage, id: &str) -> JsRasterImage {
    let recipe = preset_recipe(id);
    JsRasterImage::from_raster(engine::apply_adjustments(image.raster(), &recipe))
}

/// The recipe of a built-in preset, or `undefined` for an unknown id.
#[wasm_bindgen]
pub fn preset_adjustments(id: &str) -> Option<JsAdjustments> {
    builtin()
        .get_preset(id)
        .map(|preset| JsAdjustments {
            inner: preset.adjustments,
        })
}

fn preset_recipe(id: &str) -> Adjustments {
    match builtin().get_preset(id) {
        Some(preset) => preset.adjustments,
        None => {
            log::warn!("preset '{}' not found, leaving image unchanged", id);
            Adjustments::IDENTITY
        }
    }
}
