//! Color adjustment engine.
//!
//! Applies a film recipe to RGBA pixel data.
//!
//! ## Adjustment Order
//! 1. Brightness
//! 2. Contrast
//! 3. Saturation
//! 4. Grayscale
//! 5. Sepia
//! 6. Hue rotation
//!
//! Channels are normalized to 0.0-1.0 and clamped after every operation so
//! overflow never compounds along the chain. Alpha is never touched.

use serde::{Deserialize, Serialize};

use crate::luminance::luma;
use crate::raster::{RasterImage, CHANNELS};

/// Warm brown target of the sepia operation (`#704214`), normalized.
const SEPIA_TARGET: (f32, f32, f32) = (112.0 / 255.0, 66.0 / 255.0, 20.0 / 255.0);

/// Mid-gray pivot for contrast.
const MIDPOINT: f32 = 0.5;

/// A primitive color operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Brightness,
    Contrast,
    Saturation,
    Grayscale,
    Sepia,
    HueRotate,
}

/// The order operations are composed in. Not commutative in general.
pub const CANONICAL_ORDER: [Operation; 6] = [
    Operation::Brightness,
    Operation::Contrast,
    Operation::Saturation,
    Operation::Grayscale,
    Operation::Sepia,
    Operation::HueRotate,
];

/// A film recipe: one strength per primitive operation.
///
/// Every field defaults to its identity value, so a preset only names the
/// operations it actually uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Adjustments {
    /// Channel scale factor (1.0 = no change)
    pub brightness: f32,
    /// Scale of deviation from mid-gray (1.0 = no change)
    pub contrast: f32,
    /// Scale of chroma distance from luma (1.0 = no change, 0.0 = gray)
    pub saturation: f32,
    /// Blend toward luma (0.0 to 1.0)
    pub grayscale: f32,
    /// Blend toward warm brown (0.0 to 1.0)
    pub sepia: f32,
    /// Hue rotation in degrees
    pub hue_rotate: f32,
}

impl Adjustments {
    /// The recipe that leaves every pixel untouched.
    pub const IDENTITY: Adjustments = Adjustments {
        brightness: 1.0,
        contrast: 1.0,
        saturation: 1.0,
        grayscale: 0.0,
        sepia: 0.0,
        hue_rotate: 0.0,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Check if every operation is at its identity value.
    pub fn is_identity(&self) -> bool {
        CANONICAL_ORDER.iter().all(|&op| self.is_noop(op))
    }

    /// Check if a single operation is at its identity value.
    pub fn is_noop(&self, op: Operation) -> bool {
        match op {
            Operation::Brightness => self.brightness == 1.0,
            Operation::Contrast => self.contrast == 1.0,
            Operation::Saturation => self.saturation == 1.0,
            Operation::Grayscale => self.grayscale == 0.0,
            Operation::Sepia => self.sepia == 0.0,
            Operation::HueRotate => self.hue_rotate == 0.0,
        }
    }
}

impl Default for Adjustments {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Apply a recipe to a raster, returning a new raster.
///
/// The source is left untouched so the unfiltered image can always be
/// recovered without decoding again.
pub fn apply_adjustments(raster: &RasterImage, adjustments: &Adjustments) -> RasterImage {
    let mut output = raster.clone();
    apply_adjustments_in_place(output.pixels_mut(), adjustments);
    output
}

/// Apply a recipe to RGBA pixel data in place.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `adjustments` - The recipe to apply
///
/// A trailing partial pixel is ignored.
pub fn apply_adjustments_in_place(pixels: &mut [u8], adjustments: &Adjustments) {
    // Early exit keeps the identity recipe bit-exact
    if adjustments.is_identity() {
        return;
    }

    let active: Vec<Operation> = CANONICAL_ORDER
        .iter()
        .copied()
        .filter(|&op| !adjustments.is_noop(op))
        .collect();

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let mut rgb = (
            chunk[0] as f32 / 255.0,
            chunk[1] as f32 / 255.0,
            chunk[2] as f32 / 255.0,
        );

        for &op in &active {
            rgb = clamp_unit(apply_operation(op, rgb, adjustments));
        }

        chunk[0] = to_u8(rgb.0);
        chunk[1] = to_u8(rgb.1);
        chunk[2] = to_u8(rgb.2);
    }
}

#[inline]
fn apply_operation(op: Operation, rgb: (f32, f32, f32), adj: &Adjustments) -> (f32, f32, f32) {
    let (r, g, b) = rgb;
    match op {
        Operation::Brightness => apply_brightness(r, g, b, adj.brightness),
        Operation::Contrast => apply_contrast(r, g, b, adj.contrast),
        Operation::Saturation => apply_saturation(r, g, b, adj.saturation),
        Operation::Grayscale => apply_grayscale(r, g, b, adj.grayscale),
        Operation::Sepia => apply_sepia(r, g, b, adj.sepia),
        Operation::HueRotate => apply_hue_rotate(r, g, b, adj.hue_rotate),
    }
}

#[inline]
fn clamp_unit((r, g, b): (f32, f32, f32)) -> (f32, f32, f32) {
    (clamp01(r), clamp01(g), clamp01(b))
}

/// Clamp to 0.0-1.0, mapping NaN to 0.0.
#[inline]
fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

/// Formula: `output = input * factor`
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    (r * factor, g * factor, b * factor)
}

/// Formula: `output = (input - 0.5) * factor + 0.5`
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    (
        (r - MIDPOINT) * factor + MIDPOINT,
        (g - MIDPOINT) * factor + MIDPOINT,
        (b - MIDPOINT) * factor + MIDPOINT,
    )
}

/// Scale each channel's distance from the pixel's luma.
#[inline]
fn apply_saturation(r: f32, g: f32, b: f32, factor: f32) -> (f32, f32, f32) {
    let gray = luma(r, g, b);
    (
        gray + (r - gray) * factor,
        gray + (g - gray) * factor,
        gray + (b - gray) * factor,
    )
}

/// Blend toward the pixel's luma by `amount`.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    let amount = amount.clamp(0.0, 1.0);
    let gray = luma(r, g, b);
    (lerp(r, gray, amount), lerp(g, gray, amount), lerp(b, gray, amount))
}

/// Blend toward the fixed sepia target by `amount`.
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    let amount = amount.clamp(0.0, 1.0);
    let (tr, tg, tb) = SEPIA_TARGET;
    (lerp(r, tr, amount), lerp(g, tg, amount), lerp(b, tb, amount))
}

/// Rotate the hue angle in HSL space, keeping saturation and lightness.
#[inline]
fn apply_hue_rotate(r: f32, g: f32, b: f32, degrees: f32) -> (f32, f32, f32) {
    let (h, s, l) = rgb_to_hsl(r, g, b);
    if s == 0.0 {
        // Achromatic pixels have no hue to rotate
        return (r, g, b);
    }
    hsl_to_rgb((h + degrees).rem_euclid(360.0), s, l)
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Convert normalized RGB to HSL (hue in degrees, 0.0-360.0).
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h, s, l)
}

/// Convert HSL (hue in degrees) back to normalized RGB.
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create an opaque RGBA pixel
    fn pixel(r: u8, g: u8, b: u8) -> Vec<u8> {
        vec![r, g, b, 255]
    }

    /// Helper to apply adjustments and return resulting pixel data
    fn apply(pixels: &[u8], adj: &Adjustments) -> Vec<u8> {
        let mut result = pixels.to_vec();
        apply_adjustments_in_place(&mut result, adj);
        result
    }

    // ===== Identity Tests =====

    #[test]
    fn test_identity_no_adjustments() {
        let pixels = vec![128, 64, 192, 255, 0, 0, 0, 0, 255, 255, 255, 17];
        let result = apply(&pixels, &Adjustments::default());
        assert_eq!(result, pixels, "Identity recipe should not change pixels");
    }

    #[test]
    fn test_is_identity() {
        assert!(Adjustments::new().is_identity());
        let adj = Adjustments {
            hue_rotate: 5.0,
            ..Adjustments::IDENTITY
        };
        assert!(!adj.is_identity());
        assert!(adj.is_noop(Operation::Contrast));
        assert!(!adj.is_noop(Operation::HueRotate));
    }

    #[test]
    fn test_apply_adjustments_does_not_modify_source() {
        let source = RasterImage::filled(2, 2, [100, 150, 200, 255]).unwrap();
        let adj = Adjustments {
            brightness: 1.5,
            ..Adjustments::IDENTITY
        };
        let out = apply_adjustments(&source, &adj);
        assert_eq!(source.pixel(0, 0), Some([100, 150, 200, 255]));
        assert_ne!(out, source);
    }

    // ===== Brightness Tests =====

    #[test]
    fn test_brightness_scales_channels() {
        let adj = Adjustments {
            brightness: 0.5,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(200, 100, 50), &adj), pixel(100, 50, 25));
    }

    #[test]
    fn test_brightness_clips_at_white() {
        let adj = Adjustments {
            brightness: 4.0,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(200, 200, 10), &adj), pixel(255, 255, 40));
    }

    // ===== Contrast Tests =====

    #[test]
    fn test_contrast_increase() {
        let adj = Adjustments {
            contrast: 2.0,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(64, 128, 192), &adj);
        assert!(result[0] < 64, "Dark pixel should get darker");
        assert!((result[1] as i32 - 128).abs() <= 1, "Mid pixel stays near middle");
        assert!(result[2] > 192, "Bright pixel should get brighter");
    }

    #[test]
    fn test_contrast_flatten() {
        let adj = Adjustments {
            contrast: 0.0,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(0, 100, 255), &adj);
        // Everything collapses onto mid-gray
        assert_eq!(result, vec![128, 128, 128, 255]);
    }

    // ===== Saturation Tests =====

    #[test]
    fn test_saturation_zero_desaturates() {
        let adj = Adjustments {
            saturation: 0.0,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(200, 128, 100), &adj);
        assert_eq!(result[0], result[1]);
        assert_eq!(result[1], result[2]);
    }

    #[test]
    fn test_saturation_increase() {
        let adj = Adjustments {
            saturation: 1.5,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(200, 128, 100), &adj);
        let new_diff = result[0] as i32 - result[2] as i32;
        assert!(new_diff > 100, "Color difference should increase");
    }

    // ===== Grayscale Tests =====

    #[test]
    fn test_grayscale_full() {
        let adj = Adjustments {
            grayscale: 1.0,
            ..Adjustments::IDENTITY
        };
        // BT.709 luma of pure green is ~182
        assert_eq!(apply(&pixel(0, 255, 0), &adj), pixel(182, 182, 182));
    }

    #[test]
    fn test_grayscale_half() {
        let adj = Adjustments {
            grayscale: 0.5,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(255, 0, 0), &adj);
        // Halfway between 255 and ~54, and between 0 and ~54
        assert!((result[0] as i32 - 155).abs() <= 1);
        assert!((result[1] as i32 - 27).abs() <= 1);
    }

    // ===== Sepia Tests =====

    #[test]
    fn test_sepia_full_reaches_target() {
        let adj = Adjustments {
            sepia: 1.0,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(0, 200, 255), &adj), pixel(112, 66, 20));
    }

    #[test]
    fn test_sepia_warms_gray() {
        let adj = Adjustments {
            sepia: 0.3,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(128, 128, 128), &adj);
        assert!(result[0] > result[2], "Sepia should push red above blue");
    }

    // ===== Hue Rotation Tests =====

    #[test]
    fn test_hue_rotate_red_to_green() {
        let adj = Adjustments {
            hue_rotate: 120.0,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(255, 0, 0), &adj), pixel(0, 255, 0));
    }

    #[test]
    fn test_hue_rotate_negative_wraps() {
        let adj = Adjustments {
            hue_rotate: -120.0,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(255, 0, 0), &adj), pixel(0, 0, 255));
    }

    #[test]
    fn test_hue_rotate_full_turn() {
        let adj = Adjustments {
            hue_rotate: 360.0,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(200, 80, 30), &adj);
        for (got, want) in result.iter().zip(pixel(200, 80, 30)) {
            assert!((*got as i32 - want as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_hue_rotate_leaves_gray() {
        let adj = Adjustments {
            hue_rotate: 45.0,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(90, 90, 90), &adj), pixel(90, 90, 90));
    }

    #[test]
    fn test_hsl_round_trip() {
        let (h, s, l) = rgb_to_hsl(0.8, 0.3, 0.1);
        let (r, g, b) = hsl_to_rgb(h, s, l);
        assert!((r - 0.8).abs() < 1e-5);
        assert!((g - 0.3).abs() < 1e-5);
        assert!((b - 0.1).abs() < 1e-5);
    }

    // ===== Order and Alpha Tests =====

    #[test]
    fn test_alpha_untouched() {
        let pixels = vec![10, 20, 30, 0, 40, 50, 60, 77];
        let adj = Adjustments {
            brightness: 1.3,
            contrast: 1.4,
            saturation: 0.2,
            grayscale: 0.5,
            sepia: 0.5,
            hue_rotate: 90.0,
        };
        let result = apply(&pixels, &adj);
        assert_eq!(result[3], 0);
        assert_eq!(result[7], 77);
    }

    #[test]
    fn test_grayscale_then_sepia_order() {
        // Grayscale runs before sepia, so a full sepia wins outright
        let adj = Adjustments {
            grayscale: 1.0,
            sepia: 1.0,
            ..Adjustments::IDENTITY
        };
        assert_eq!(apply(&pixel(10, 240, 90), &adj), pixel(112, 66, 20));
    }

    #[test]
    fn test_extreme_values_stay_in_range() {
        let adj = Adjustments {
            brightness: 50.0,
            contrast: -20.0,
            saturation: 30.0,
            grayscale: 3.0,
            sepia: -2.0,
            hue_rotate: 7200.5,
        };
        let result = apply(&pixel(128, 10, 250), &adj);
        assert_eq!(result.len(), 4);
        assert_eq!(result[3], 255);
    }

    #[test]
    fn test_nan_parameters_do_not_panic() {
        let adj = Adjustments {
            contrast: f32::NAN,
            ..Adjustments::IDENTITY
        };
        let result = apply(&pixel(128, 10, 250), &adj);
        assert_eq!(result[3], 255);
    }

    // ===== Edge Case Tests =====

    #[test]
    fn test_empty_pixels() {
        let adj = Adjustments {
            contrast: 1.2,
            ..Adjustments::IDENTITY
        };
        assert!(apply(&[], &adj).is_empty());
    }

    #[test]
    fn test_incomplete_pixel_ignored() {
        let mut pixels = vec![100, 100, 100, 255, 64, 64];
        let adj = Adjustments {
            brightness: 2.0,
            ..Adjustments::IDENTITY
        };
        apply_adjustments_in_place(&mut pixels, &adj);
        assert_eq!(&pixels[..4], &[200, 200, 200, 255]);
        assert_eq!(&pixels[4..], &[64, 64]);
    }
}
