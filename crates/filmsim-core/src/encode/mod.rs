//! Export encoding.
//!
//! This module provides functionality for:
//! - Encoding rasters to JPEG with configurable quality (alpha dropped)
//! - Encoding rasters to PNG (lossless, alpha kept)
//! - Naming exported files after the active preset

mod jpeg;
mod png;

pub use jpeg::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use png::encode_png;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::RasterImage;

/// Prefix of every exported file name.
const FILENAME_PREFIX: &str = "filmsim";

/// Stem used when no preset is selected.
const ORIGINAL_STEM: &str = "original";

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Output format for exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExportFormat {
    /// Lossy JPEG, quality 1-100
    Jpeg { quality: u8 },
    /// Lossless PNG
    Png,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Jpeg { .. } => "jpg",
            ExportFormat::Png => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Jpeg { .. } => "image/jpeg",
            ExportFormat::Png => "image/png",
        }
    }

    /// Encode a raster in this format.
    pub fn encode(self, raster: &RasterImage) -> Result<Vec<u8>, EncodeError> {
        match self {
            ExportFormat::Jpeg { quality } => encode_jpeg(raster, quality),
            ExportFormat::Png => encode_png(raster),
        }
    }
}

/// Suggested file name: `filmsim-<presetId|original>.<ext>`.
pub fn export_filename(preset_id: Option<&str>, format: ExportFormat) -> String {
    format!(
        "{}-{}.{}",
        FILENAME_PREFIX,
        preset_id.unwrap_or(ORIGINAL_STEM),
        format.extension()
    )
}

fn check_dimensions(raster: &RasterImage) -> Result<(), EncodeError> {
    if raster.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: raster.width(),
            height: raster.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename(Some("fuji-velvia"), ExportFormat::default()),
            "filmsim-fuji-velvia.jpg"
        );
        assert_eq!(
            export_filename(None, ExportFormat::default()),
            "filmsim-original.jpg"
        );
        assert_eq!(
            export_filename(Some("leica-hc-bw"), ExportFormat::Png),
            "filmsim-leica-hc-bw.png"
        );
    }

    #[test]
    fn test_default_format() {
        assert_eq!(ExportFormat::default(), ExportFormat::Jpeg { quality: 95 });
        assert_eq!(ExportFormat::default().mime_type(), "image/jpeg");
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
    }

    #[test]
    fn test_format_dispatch() {
        let img = RasterImage::filled(4, 4, [10, 20, 30, 255]).unwrap();
        let jpeg = ExportFormat::default().encode(&img).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let png = ExportFormat::Png.encode(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_empty_raster_rejected() {
        let img = RasterImage::new(0, 4, vec![]).unwrap();
        assert!(matches!(
            ExportFormat::Png.encode(&img),
            Err(EncodeError::InvalidDimensions { width: 0, height: 4 })
        ));
    }
}
