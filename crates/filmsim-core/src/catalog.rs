//! Film stock preset catalog.
//!
//! A flat list of presets tagged with a camera brand. Brand grouping is
//! derived on demand, always in definition order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjustments::Adjustments;

/// Errors raised when building a custom catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two presets share the same id.
    #[error("Duplicate preset id: {0}")]
    DuplicateId(String),

    /// A required text field is empty.
    #[error("Preset '{id}' is missing a {field}")]
    MissingField { id: String, field: &'static str },
}

/// One film-stock emulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmPreset {
    /// Stable identifier, also used for export file names
    pub id: String,
    /// Display name
    pub name: String,
    /// Camera manufacturer the preset is grouped under
    pub brand: String,
    /// Color recipe
    pub adjustments: Adjustments,
}

impl FilmPreset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        adjustments: Adjustments,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            adjustments,
        }
    }
}

/// Read-only collection of presets.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    presets: Vec<FilmPreset>,
}

impl Catalog {
    /// Build a catalog from presets, validating ids and brands.
    pub fn new(presets: Vec<FilmPreset>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(presets.len());
        for preset in &presets {
            if preset.id.is_empty() {
                return Err(CatalogError::MissingField {
                    id: preset.name.clone(),
                    field: "id",
                });
            }
            if preset.brand.is_empty() {
                return Err(CatalogError::MissingField {
                    id: preset.id.clone(),
                    field: "brand",
                });
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(CatalogError::DuplicateId(preset.id.clone()));
            }
        }
        Ok(Self { presets })
    }

    /// The built-in catalog of film stocks.
    pub fn builtin() -> Self {
        let presets = BUILTIN_PRESETS
            .iter()
            .map(|&(id, name, brand, adjustments)| FilmPreset::new(id, name, brand, adjustments))
            .collect();
        Self { presets }
    }

    /// Unique brand names in definition order.
    pub fn list_brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.presets
            .iter()
            .map(|p| p.brand.as_str())
            .filter(|brand| seen.insert(*brand))
            .collect()
    }

    /// Presets of `brand` in definition order. Empty for unknown brands.
    pub fn list_presets(&self, brand: &str) -> Vec<&FilmPreset> {
        self.presets.iter().filter(|p| p.brand == brand).collect()
    }

    /// Look up a preset by id.
    pub fn get_preset(&self, id: &str) -> Option<&FilmPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilmPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn recipe(
    brightness: f32,
    contrast: f32,
    saturation: f32,
    grayscale: f32,
    sepia: f32,
    hue_rotate: f32,
) -> Adjustments {
    Adjustments {
        brightness,
        contrast,
        saturation,
        grayscale,
        sepia,
        hue_rotate,
    }
}

/// Built-in film stocks: (id, name, brand, recipe).
///
/// Recipe columns: brightness, contrast, saturation, grayscale, sepia, hue.
#[rustfmt::skip]
const BUILTIN_PRESETS: &[(&str, &str, &str, Adjustments)] = &[
    // Fujifilm
    ("fuji-provia", "Provia (Standard)", "Fujifilm", recipe(1.0, 1.05, 1.1, 0.0, 0.0, 0.0)),
    ("fuji-velvia", "Velvia (Vivid)", "Fujifilm", recipe(1.0, 1.1, 1.3, 0.0, 0.0, 0.0)),
    ("fuji-astia", "Astia (Soft)", "Fujifilm", recipe(1.0, 0.95, 1.05, 0.0, 0.05, 0.0)),
    ("fuji-classic-chrome", "Classic Chrome", "Fujifilm", recipe(1.0, 1.1, 0.8, 0.0, 0.1, -10.0)),
    ("fuji-acros", "Acros (B&W)", "Fujifilm", recipe(1.0, 1.2, 1.0, 1.0, 0.0, 0.0)),
    ("fuji-classic-neg", "Classic Neg", "Fujifilm", recipe(1.0, 1.2, 0.85, 0.0, 0.1, -5.0)),
    ("fuji-eterna", "Eterna (Cinema)", "Fujifilm", recipe(1.0, 0.85, 0.8, 0.0, 0.05, 0.0)),
    ("fuji-pro-neg-hi", "Pro Neg. Hi", "Fujifilm", recipe(1.0, 1.15, 0.95, 0.0, 0.0, 0.0)),

    // Leica
    ("leica-standard", "Standard", "Leica", recipe(1.0, 1.05, 1.0, 0.0, 0.0, 0.0)),
    ("leica-vivid", "Vivid", "Leica", recipe(1.0, 1.15, 1.2, 0.0, 0.0, 0.0)),
    ("leica-natural", "Natural", "Leica", recipe(1.0, 0.95, 0.95, 0.0, 0.0, 0.0)),
    ("leica-hc-bw", "High Contrast B&W", "Leica", recipe(1.0, 1.4, 1.0, 1.0, 0.0, 0.0)),
    ("leica-classic-bw", "Classic B&W", "Leica", recipe(1.0, 1.1, 1.0, 1.0, 0.1, 0.0)),
    ("leica-monochrom", "Monochrom", "Leica", recipe(0.95, 1.3, 1.0, 1.0, 0.0, 0.0)),
    ("leica-nostalgic", "Nostalgic", "Leica", recipe(1.0, 0.9, 0.8, 0.0, 0.3, -10.0)),
    ("leica-cinematic", "Cinematic", "Leica", recipe(1.0, 1.2, 0.9, 0.0, 0.1, 10.0)),

    // Hasselblad
    ("hasselblad-hncs", "HNCS", "Hasselblad", recipe(1.0, 1.0, 1.05, 0.0, 0.0, 0.0)),
    ("hasselblad-portrait", "Portrait", "Hasselblad", recipe(1.0, 0.9, 1.0, 0.0, 0.05, 0.0)),
    ("hasselblad-landscape", "Landscape", "Hasselblad", recipe(1.0, 1.1, 1.2, 0.0, 0.0, 5.0)),
    ("hasselblad-bw", "B&W", "Hasselblad", recipe(1.0, 1.15, 1.0, 1.0, 0.0, 0.0)),
    ("hasselblad-cinematic", "Cinematic", "Hasselblad", recipe(1.0, 1.2, 0.9, 0.0, 0.2, -15.0)),
    ("hasselblad-xpan", "XPan", "Hasselblad", recipe(1.0, 1.25, 0.9, 0.0, 0.0, 0.0)),
    ("hasselblad-faded", "Faded", "Hasselblad", recipe(1.1, 0.8, 0.8, 0.0, 0.0, 0.0)),
    ("hasselblad-vibrant", "Vibrant", "Hasselblad", recipe(1.0, 1.1, 1.3, 0.0, 0.0, -5.0)),

    // Sigma
    ("sigma-standard", "Standard", "Sigma", recipe(1.0, 1.0, 1.0, 0.0, 0.0, 0.0)),
    ("sigma-vivid", "Vivid", "Sigma", recipe(1.0, 1.1, 1.25, 0.0, 0.0, 0.0)),
    ("sigma-cinematic", "Cinematic", "Sigma", recipe(1.0, 1.1, 0.8, 0.0, 0.15, 0.0)),
    ("sigma-teal-orange", "Teal & Orange", "Sigma", recipe(1.0, 1.1, 1.2, 0.0, 0.2, -15.0)),
    ("sigma-forest-green", "Forest Green", "Sigma", recipe(1.0, 1.05, 1.1, 0.0, 0.0, 10.0)),
    ("sigma-powder-blue", "Powder Blue", "Sigma", recipe(1.1, 0.9, 0.9, 0.0, 0.0, 5.0)),
    ("sigma-monochrome", "Monochrome", "Sigma", recipe(1.0, 1.1, 1.0, 1.0, 0.0, 0.0)),
    ("sigma-warm-gold", "Warm Gold", "Sigma", recipe(1.0, 1.05, 1.1, 0.0, 0.2, -15.0)),
];
