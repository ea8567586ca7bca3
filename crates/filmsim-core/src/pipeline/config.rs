//! Render pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::encode::ExportFormat;
use crate::sharpen::DEFAULT_SHARPEN_AMOUNT;

/// Brand shown when nothing has been browsed yet.
pub const DEFAULT_BRAND: &str = "Fujifilm";

/// Tunables of the render pipeline.
///
/// Every field has a default, so a partial JSON object from the host is
/// enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Sharpen strength applied when "Enhance" is on (0.0 to 1.0)
    pub enhance_amount: f32,
    /// Format used by `RenderPipeline::export`
    pub export_format: ExportFormat,
    /// Brand selected on start and after `clear`
    pub default_brand: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            enhance_amount: DEFAULT_SHARPEN_AMOUNT,
            export_format: ExportFormat::default(),
            default_brand: DEFAULT_BRAND.to_string(),
        }
    }
}
