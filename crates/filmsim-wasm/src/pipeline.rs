//! Render pipeline WASM bindings.
//!
//! The browser drives the pipeline from UI events. Every event that needs a
//! new render returns a generation number; the front-end schedules
//! `run_render(generation)` on its event loop and redraws when it returns
//! `true`. A pass superseded by a later event is skipped without running.
//!
//! ```typescript
//! const pipeline = new JsRenderPipeline({ enhanceAmount: 0.5 });
//!
//! function schedule(generation?: number) {
//!   if (generation === undefined) return;
//!   setTimeout(() => {
//!     if (pipeline.run_render(generation)) draw(pipeline.current()!);
//!   });
//! }
//!
//! schedule(pipeline.load(bytes));
//! presetButton.onclick = () => schedule(pipeline.select_preset('fuji-velvia'));
//! enhanceToggle.onchange = () => schedule(pipeline.toggle_enhance());
//! ```

use filmsim_core::{ExportFormat, PipelineConfig, PipelineState, RenderJob, RenderPipeline};
use wasm_bindgen::prelude::*;

use crate::types::JsRasterImage;

/// Render pipeline wrapper for JavaScript.
#[wasm_bindgen]
pub struct JsRenderPipeline {
    inner: RenderPipeline,
    /// Latest requested pass not yet run
    pending: Option<RenderJob>,
}

#[wasm_bindgen]
impl JsRenderPipeline {
    /// Create a pipeline; `config` is an optional partial `PipelineConfig`
    /// object (`{ enhanceAmount, exportFormat, defaultBrand }`).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsRenderPipeline, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            PipelineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(Self::with_config(config))
    }

    /// Decode and load a source image. Returns the generation of the first
    /// render pass.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded; the pipeline is then
    /// empty.
    pub fn load(&mut self, bytes: &[u8]) -> Result<u32, JsValue> {
        self.pending = None;
        let job = self
            .inner
            .load(bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(self.schedule(job))
    }

    /// Browse another brand. Returns `false` for a brand with no presets.
    pub fn select_brand(&mut self, brand: &str) -> bool {
        self.inner.select_brand(brand)
    }

    #[wasm_bindgen(getter)]
    pub fn selected_brand(&self) -> String {
        self.inner.selection().brand.clone()
    }

    /// Select a preset (`undefined` for the original). Returns the
    /// generation to run, or `undefined` when no image is loaded.
    pub fn select_preset(&mut self, id: Option<String>) -> Option<u32> {
        let job = self.inner.select_preset(id.as_deref())?;
        Some(self.schedule(job))
    }

    #[wasm_bindgen(getter)]
    pub fn selected_preset(&self) -> Option<String> {
        self.inner.selection().preset_id.clone()
    }

    /// Flip the enhance toggle. Returns the generation to run, or
    /// `undefined` when no image is loaded.
    pub fn toggle_enhance(&mut self) -> Option<u32> {
        let job = self.inner.toggle_enhance()?;
        Some(self.schedule(job))
    }

    #[wasm_bindgen(getter)]
    pub fn is_enhanced(&self) -> bool {
        self.inner.selection().enhance
    }

    /// Drop the image and selection.
    pub fn clear(&mut self) {
        self.pending = None;
        self.inner.clear();
    }

    /// Request a pass for the current selection.
    pub fn request_render(&mut self) -> Option<u32> {
        let job = self.inner.request_render()?;
        Some(self.schedule(job))
    }

    /// Run the pending pass if `generation` is still the latest request.
    ///
    /// Returns `true` when a new image is ready to be drawn.
    pub fn run_render(&mut self, generation: u32) -> bool {
        match self.pending.take() {
            Some(job) if job_token(&job) == generation => {
                let output = job.run();
                self.inner.commit(output)
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Request, run and commit a pass synchronously.
    pub fn render(&mut self) -> bool {
        self.pending = None;
        self.inner.render()
    }

    #[wasm_bindgen(getter)]
    pub fn is_processing(&self) -> bool {
        self.inner.is_processing()
    }

    /// "empty", "decoding", "ready" or "rendering"
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        state_name(self.inner.state()).to_string()
    }

    /// The image to draw, or `undefined` while empty or processing.
    pub fn current(&self) -> Option<JsRasterImage> {
        self.inner
            .display()
            .raster()
            .cloned()
            .map(JsRasterImage::from_raster)
    }

    /// Export the current image in the configured format.
    pub fn export(&self) -> Result<JsExport, JsValue> {
        self.inner
            .export()
            .map(JsExport::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Export in an explicit format, e.g. `{ kind: "png" }` or
    /// `{ kind: "jpeg", quality: 90 }`.
    pub fn export_as(&self, format: JsValue) -> Result<JsExport, JsValue> {
        let format: ExportFormat =
            serde_wasm_bindgen::from_value(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner
            .export_as(format)
            .map(JsExport::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsRenderPipeline {
    pub(crate) fn with_config(config: PipelineConfig) -> Self {
        Self {
            inner: RenderPipeline::with_config(config),
            pending: None,
        }
    }

    /// Park `job` as the pending pass, replacing any older one.
    fn schedule(&mut self, job: RenderJob) -> u32 {
        let token = job_token(&job);
        self.pending = Some(job);
        token
    }
}

/// Generation truncated to a JS-friendly `u32`.
fn job_token(job: &RenderJob) -> u32 {
    job.generation() as u32
}

fn state_name(state: PipelineState) -> &'static str {
    match state {
        PipelineState::Empty => "empty",
        PipelineState::Decoding => "decoding",
        PipelineState::Ready => "ready",
        PipelineState::Rendering => "rendering",
    }
}

/// An encoded export ready to be downloaded.
#[wasm_bindgen]
pub struct JsExport {
    bytes: Vec<u8>,
    filename: String,
    mime_type: &'static str,
}

#[wasm_bindgen]
impl JsExport {
    /// Encoded file bytes as a `Uint8Array` (copied)
    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Suggested download name, e.g. `filmsim-fuji-velvia.jpg`
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.filename.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.to_string()
    }
}

impl From<filmsim_core::ExportedImage> for JsExport {
    fn from(export: filmsim_core::ExportedImage) -> Self {
        Self {
            bytes: export.bytes,
            filename: export.filename,
            mime_type: export.mime_type,
        }
    }
}
