//! A single render pass, detached from the pipeline that scheduled it.

use std::sync::Arc;

use crate::adjustments::{apply_adjustments, Adjustments};
use crate::raster::RasterImage;
use crate::sharpen::sharpen_in_place;

/// Everything one render pass needs, captured when it was requested.
///
/// Running a job is pure: it never touches the pipeline, so a host may run
/// it whenever its event loop allows and hand the output back to
/// [`RenderPipeline::commit`](super::RenderPipeline::commit).
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub(super) generation: u64,
    pub(super) source: Arc<RasterImage>,
    pub(super) preset_id: Option<String>,
    pub(super) adjustments: Adjustments,
    pub(super) sharpen_amount: Option<f32>,
}

impl RenderJob {
    /// Request counter value this job was created with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn preset_id(&self) -> Option<&str> {
        self.preset_id.as_deref()
    }

    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Sharpen strength, `None` when enhance is off.
    pub fn sharpen_amount(&self) -> Option<f32> {
        self.sharpen_amount
    }

    /// Apply the recipe, then sharpen if enhance was on.
    pub fn run(&self) -> RenderOutput {
        let mut raster = apply_adjustments(&self.source, &self.adjustments);
        if let Some(amount) = self.sharpen_amount {
            sharpen_in_place(&mut raster, amount);
        }
        RenderOutput {
            generation: self.generation,
            preset_id: self.preset_id.clone(),
            raster,
        }
    }
}

/// Result of a render pass, waiting to be committed.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub(super) generation: u64,
    pub(super) preset_id: Option<String>,
    pub(super) raster: RasterImage,
}

impl RenderOutput {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn raster(&self) -> &RasterImage {
        &self.raster
    }
}
