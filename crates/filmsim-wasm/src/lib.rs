//! Filmsim WASM - WebAssembly bindings for Filmsim
//!
//! This crate exposes the filmsim-core functionality to a JavaScript/TypeScript
//! front-end.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for raster images
//! - `decode` - Source image decoding
//! - `encode` - JPEG/PNG encoding
//! - `catalog` - Built-in film preset catalog
//! - `adjustments` - Color recipes and the adjustment engine
//! - `sharpen` - Enhance (sharpen) filter
//! - `pipeline` - Render pipeline driven by UI selection events
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRenderPipeline } from '@filmsim/wasm';
//!
//! await init();
//!
//! const pipeline = new JsRenderPipeline();
//! const generation = pipeline.load(new Uint8Array(await file.arrayBuffer()));
//! setTimeout(() => {
//!   if (pipeline.run_render(generation)) draw(pipeline.current());
//! });
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod catalog;
mod decode;
mod encode;
mod pipeline;
mod sharpen;
mod types;

pub use adjustments::{apply_adjustments, apply_preset, preset_adjustments, JsAdjustments};
pub use catalog::{get_preset, list_brands, list_presets};
pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_jpeg_from_image, encode_png};
pub use pipeline::{JsExport, JsRenderPipeline};
pub use sharpen::sharpen;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // A second init (e.g. module re-instantiated by a bundler) keeps the
    // first logger
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("filmsim-wasm {} ready", version());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
