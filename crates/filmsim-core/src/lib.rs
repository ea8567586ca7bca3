//! Filmsim Core - Film simulation image processing library
//!
//! This crate provides the core processing for Filmsim: decoding source
//! images, the brand film-preset catalog, the color adjustment engine, the
//! enhance (sharpen) filter, the render pipeline state machine, and export
//! encoding.

pub mod adjustments;
pub mod catalog;
pub mod decode;
pub mod encode;
pub mod luminance;
pub mod pipeline;
pub mod raster;
pub mod sharpen;

pub use adjustments::{apply_adjustments, Adjustments, Operation, CANONICAL_ORDER};
pub use catalog::{Catalog, CatalogError, FilmPreset};
pub use decode::{decode_image, DecodeError};
pub use encode::{export_filename, EncodeError, ExportFormat};
pub use pipeline::{
    Display, ExportedImage, PipelineConfig, PipelineError, PipelineState, RenderJob,
    RenderOutput, RenderPipeline, Selection,
};
pub use raster::{RasterError, RasterImage};
pub use sharpen::{sharpen, DEFAULT_SHARPEN_AMOUNT};
