//! Render pipeline: decode, apply the selected recipe, optionally sharpen,
//! and hand the result to the host for display or export.
//!
//! # Scheduling
//!
//! The pipeline never runs a pass on its own. Every selection change that
//! needs a new render returns a [`RenderJob`]; the host runs it when its
//! event loop is free and passes the [`RenderOutput`] to
//! [`RenderPipeline::commit`]. Each request bumps a generation counter and
//! only the output of the latest request is accepted, so a superseded pass
//! is simply dropped when it finishes.
//!
//! Synchronous hosts can call [`RenderPipeline::render`], which does all
//! three steps at once.

mod config;
mod job;
mod state;

pub use config::{PipelineConfig, DEFAULT_BRAND};
pub use job::{RenderJob, RenderOutput};
pub use state::{Display, PipelineState, Selection};

use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::adjustments::Adjustments;
use crate::catalog::Catalog;
use crate::decode::{decode_image, DecodeError};
use crate::encode::{export_filename, EncodeError, ExportFormat};
use crate::raster::RasterImage;

/// Errors surfaced by the render pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source bytes could not be decoded. The pipeline is back to `Empty`.
    #[error("Failed to decode source image: {0}")]
    Decode(#[from] DecodeError),

    /// The rendered raster could not be encoded.
    #[error("Failed to encode export: {0}")]
    Encode(#[from] EncodeError),

    /// Export was requested before anything was rendered.
    #[error("Nothing to export: no image has been rendered")]
    EmptyExportRequest,
}

/// An encoded export ready to be saved by the host.
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub bytes: Vec<u8>,
    /// Suggested file name, e.g. `filmsim-fuji-velvia.jpg`
    pub filename: String,
    pub mime_type: &'static str,
}

/// One image's worth of render state.
#[derive(Debug)]
pub struct RenderPipeline {
    config: PipelineConfig,
    catalog: Catalog,
    state: PipelineState,
    selection: Selection,
    source: Option<Arc<RasterImage>>,
    rendered: Option<RenderOutput>,
    generation: u64,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPipeline {
    /// Create a pipeline with the built-in catalog and default settings.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Self {
        Self {
            selection: Selection::new(config.default_brand.clone()),
            config,
            catalog: Catalog::builtin(),
            state: PipelineState::Empty,
            source: None,
            rendered: None,
            generation: 0,
        }
    }

    /// Replace the preset catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The decoded, unfiltered source image.
    pub fn source(&self) -> Option<&RasterImage> {
        self.source.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        matches!(
            self.state,
            PipelineState::Decoding | PipelineState::Rendering
        )
    }

    /// What the host should currently show.
    pub fn display(&self) -> Display<'_> {
        match (self.state, &self.rendered) {
            (PipelineState::Empty, _) => Display::Empty,
            (PipelineState::Ready, Some(output)) => Display::Ready(&output.raster),
            _ => Display::Processing,
        }
    }

    // ===== Source lifecycle =====

    /// Drop the current image and enter `Decoding`.
    pub fn begin_decode(&mut self) {
        self.discard_image();
        self.state = PipelineState::Decoding;
        debug!("pipeline: decoding");
    }

    /// Decode `bytes` and load the result.
    ///
    /// On success returns the first render pass. On failure the pipeline is
    /// left `Empty`.
    pub fn load(&mut self, bytes: &[u8]) -> Result<RenderJob, PipelineError> {
        self.begin_decode();
        match decode_image(bytes) {
            Ok(raster) => Ok(self.load_raster(raster)),
            Err(err) => {
                warn!("pipeline: decode failed: {}", err);
                self.state = PipelineState::Empty;
                Err(err.into())
            }
        }
    }

    /// Load an already-decoded raster and return the first render pass.
    ///
    /// Resets the preset and enhance choice; the browsed brand is kept.
    pub fn load_raster(&mut self, raster: RasterImage) -> RenderJob {
        debug!(
            "pipeline: loaded {}x{} source",
            raster.width(),
            raster.height()
        );
        self.discard_image();
        let source = Arc::new(raster);
        self.source = Some(Arc::clone(&source));
        self.selection.reset();
        self.state = PipelineState::Ready;
        self.schedule(source)
    }

    /// Drop the image and selection, back to `Empty`.
    pub fn clear(&mut self) {
        self.discard_image();
        self.selection = Selection::new(self.config.default_brand.clone());
        self.state = PipelineState::Empty;
        debug!("pipeline: cleared");
    }

    // ===== Selection events =====

    /// Browse a different brand. Does not change the rendered image.
    ///
    /// Returns `false` and keeps the current brand if the catalog has no
    /// preset of that brand.
    pub fn select_brand(&mut self, brand: &str) -> bool {
        if self.catalog.list_presets(brand).is_empty() {
            warn!("pipeline: unknown brand '{}'", brand);
            return false;
        }
        self.selection.brand = brand.to_string();
        true
    }

    /// Select a preset by id, or `None` for the original.
    ///
    /// Unknown ids fall back to no preset. Returns the render pass to run
    /// when an image is loaded.
    pub fn select_preset(&mut self, id: Option<&str>) -> Option<RenderJob> {
        self.selection.preset_id = match id {
            Some(id) if self.catalog.get_preset(id).is_some() => Some(id.to_string()),
            Some(id) => {
                warn!("pipeline: preset '{}' not found, using original", id);
                None
            }
            None => None,
        };
        self.request_render()
    }

    /// Flip the enhance flag. Returns the render pass to run when an image
    /// is loaded.
    pub fn toggle_enhance(&mut self) -> Option<RenderJob> {
        self.selection.enhance = !self.selection.enhance;
        self.request_render()
    }

    /// Recipe the next pass will use: the selected preset's, or identity.
    pub fn effective_adjustments(&self) -> Adjustments {
        self.selection
            .preset_id
            .as_deref()
            .and_then(|id| self.catalog.get_preset(id))
            .map(|preset| preset.adjustments)
            .unwrap_or_default()
    }

    // ===== Render passes =====

    /// Start a new pass for the current selection, superseding any pass in
    /// flight. Returns `None` when no image is loaded.
    pub fn request_render(&mut self) -> Option<RenderJob> {
        let source = Arc::clone(self.source.as_ref()?);
        Some(self.schedule(source))
    }

    /// Accept the output of a pass.
    ///
    /// Only the most recently requested pass is accepted; output of an
    /// older pass is dropped and `false` is returned.
    pub fn commit(&mut self, output: RenderOutput) -> bool {
        if self.state != PipelineState::Rendering || output.generation != self.generation {
            debug!(
                "pipeline: discarding stale pass {} (latest {})",
                output.generation, self.generation
            );
            return false;
        }
        debug!("pipeline: committed pass {}", output.generation);
        self.rendered = Some(output);
        self.state = PipelineState::Ready;
        true
    }

    /// Request, run and commit a pass in one go.
    pub fn render(&mut self) -> bool {
        match self.request_render() {
            Some(job) => {
                let output = job.run();
                self.commit(output)
            }
            None => false,
        }
    }

    // ===== Export =====

    /// Encode the displayed image in the configured format.
    pub fn export(&self) -> Result<ExportedImage, PipelineError> {
        self.export_as(self.config.export_format)
    }

    /// Encode the displayed image in `format`.
    pub fn export_as(&self, format: ExportFormat) -> Result<ExportedImage, PipelineError> {
        let output = match (&self.source, &self.rendered) {
            (Some(_), Some(output)) => output,
            _ => return Err(PipelineError::EmptyExportRequest),
        };
        Ok(ExportedImage {
            bytes: format.encode(&output.raster)?,
            filename: export_filename(output.preset_id.as_deref(), format),
            mime_type: format.mime_type(),
        })
    }

    fn schedule(&mut self, source: Arc<RasterImage>) -> RenderJob {
        self.generation += 1;
        self.state = PipelineState::Rendering;

        let sharpen_amount = self
            .selection
            .enhance
            .then_some(self.config.enhance_amount);
        debug!(
            "pipeline: pass {} requested (preset {:?}, enhance {})",
            self.generation, self.selection.preset_id, self.selection.enhance
        );

        RenderJob {
            generation: self.generation,
            source,
            preset_id: self.selection.preset_id.clone(),
            adjustments: self.effective_adjustments(),
            sharpen_amount,
        }
    }

    /// Forget the image and invalidate passes in flight.
    fn discard_image(&mut self) {
        self.source = None;
        self.rendered = None;
        self.generation += 1;
    }
}
