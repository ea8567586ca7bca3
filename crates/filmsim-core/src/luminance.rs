//! Luma calculation using ITU-R BT.709 coefficients.
//!
//! Shared by the saturation and grayscale operations of the color engine.

/// ITU-R BT.709 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.0722;

/// Calculate luma from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}
