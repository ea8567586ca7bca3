//! Selection and lifecycle state of the render pipeline.

use crate::raster::RasterImage;

/// Lifecycle of the pipeline for one loaded image.
///
/// ```text
/// Empty -> Decoding -> Ready <-> Rendering
///   ^________clear()_____|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// No source image.
    Empty,
    /// Source bytes are being decoded.
    Decoding,
    /// Source loaded, latest render committed.
    Ready,
    /// Source loaded, a render pass is in flight.
    Rendering,
}

/// What the user has picked. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Brand whose presets are being browsed
    pub brand: String,
    /// Active preset, `None` for the unfiltered original
    pub preset_id: Option<String>,
    /// Whether the sharpen pass runs
    pub enhance: bool,
}

impl Selection {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            preset_id: None,
            enhance: false,
        }
    }

    /// Drop the preset and enhance choice, keep the browsed brand.
    pub fn reset(&mut self) {
        self.preset_id = None;
        self.enhance = false;
    }
}

/// What the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display<'a> {
    /// No image loaded.
    Empty,
    /// Decoding or rendering in flight.
    Processing,
    /// The latest rendered raster.
    Ready(&'a RasterImage),
}

impl<'a> Display<'a> {
    pub fn raster(self) -> Option<&'a RasterImage> {
        match self {
            Display::Ready(raster) => Some(raster),
            _ => None,
        }
    }
}
