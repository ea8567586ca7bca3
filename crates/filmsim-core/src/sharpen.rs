//! 3x3 sharpening convolution.
//!
//! Kernel, where `a` is the strength:
//!
//! ```text
//!  0   -a    0
//! -a  1+4a  -a
//!  0   -a    0
//! ```
//!
//! R, G and B are convolved independently; alpha is copied. Taps falling
//! outside the raster sample the center pixel instead, at the tap's own
//! weight. Border pixels therefore see a full kernel with extra weight on
//! the center, and a uniform region stays uniform right up to the edge.

use crate::raster::{RasterImage, CHANNELS};

/// Strength used by the "Enhance" toggle.
pub const DEFAULT_SHARPEN_AMOUNT: f32 = 0.5;

/// Kernel side length.
const SIDE: usize = 3;
const HALF: i64 = (SIDE / 2) as i64;

/// Build the row-major kernel weights for `amount`.
fn kernel(amount: f32) -> [f32; SIDE * SIDE] {
    let edge = -amount;
    let center = 1.0 + 4.0 * amount;
    [0.0, edge, 0.0, edge, center, edge, 0.0, edge, 0.0]
}

/// Sharpen a raster, returning a new raster.
///
/// # Arguments
/// * `raster` - Source image (left unchanged)
/// * `amount` - Strength, clamped to 0.0-1.0 (0.0 = passthrough)
pub fn sharpen(raster: &RasterImage, amount: f32) -> RasterImage {
    let mut output = raster.clone();
    sharpen_in_place(&mut output, amount);
    output
}

/// Sharpen a raster in place.
///
/// Reads every tap from a snapshot taken before the first write, so no
/// output pixel ever sees an already-sharpened neighbor.
pub fn sharpen_in_place(raster: &mut RasterImage, amount: f32) {
    if !amount.is_finite() || amount <= 0.0 || raster.is_empty() {
        return;
    }
    let weights = kernel(amount.min(1.0));

    let width = raster.width() as i64;
    let height = raster.height() as i64;
    let src = raster.pixels().to_vec();
    let dst = raster.pixels_mut();

    for y in 0..height {
        for x in 0..width {
            let center = ((y * width + x) as usize) * CHANNELS;
            let mut sum = [0.0f32; 3];

            for ky in 0..SIDE as i64 {
                for kx in 0..SIDE as i64 {
                    let weight = weights[(ky as usize) * SIDE + kx as usize];
                    if weight == 0.0 {
                        continue;
                    }
                    let sy = y + ky - HALF;
                    let sx = x + kx - HALF;
                    let offset = if (0..height).contains(&sy) && (0..width).contains(&sx) {
                        ((sy * width + sx) as usize) * CHANNELS
                    } else {
                        center
                    };
                    for (c, acc) in sum.iter_mut().enumerate() {
                        *acc += src[offset + c] as f32 * weight;
                    }
                }
            }

            for (c, value) in sum.into_iter().enumerate() {
                dst[center + c] = value.round_ties_even().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(rgba: [u8; 4]) -> RasterImage {
        RasterImage::new(1, 1, rgba.to_vec()).unwrap()
    }

    #[test]
    fn test_kernel_weights_sum_to_one() {
        for amount in [0.0, 0.25, 0.5, 1.0] {
            let total: f32 = kernel(amount).iter().sum();
            assert!((total - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_zero_amount_is_passthrough() {
        let pixels: Vec<u8> = (0..36).map(|i| (i * 7) as u8).collect();
        let img = RasterImage::new(3, 3, pixels).unwrap();
        assert_eq!(sharpen(&img, 0.0), img);
    }

    #[test]
    fn test_non_finite_amount_is_passthrough() {
        let img = RasterImage::new(2, 1, vec![0, 50, 100, 255, 200, 150, 100, 255]).unwrap();
        assert_eq!(sharpen(&img, f32::NAN), img);
        assert_eq!(sharpen(&img, f32::INFINITY), img);
    }

    #[test]
    fn test_single_pixel_unchanged() {
        // Every tap resolves to the center: v * (1 + 4a) - 4a * v = v
        for amount in [0.1, 0.5, 1.0] {
            let img = single([37, 128, 250, 90]);
            assert_eq!(sharpen(&img, amount), img);
        }
    }

    #[test]
    fn test_uniform_gray_unchanged() {
        let img = RasterImage::filled(3, 3, [128, 128, 128, 255]).unwrap();
        assert_eq!(sharpen(&img, 1.0), img);
    }

    #[test]
    fn test_center_spike_amplified() {
        // Bright center surrounded by dark neighbors
        let mut img = RasterImage::filled(3, 3, [100, 100, 100, 255]).unwrap();
        let offset = img.offset(1, 1);
        img.pixels_mut()[offset..offset + 3].copy_from_slice(&[150, 150, 150]);

        let out = sharpen(&img, 0.5);
        // 150 * 3 - 0.5 * 4 * 100 = 250
        assert_eq!(out.pixel(1, 1), Some([250, 250, 250, 255]));
        // Edge neighbor (1,0): the missing top tap samples the center, the
        // bottom tap sees the spike: 100 * 3 - 0.5 * (100 + 100 + 100 + 150) = 75
        assert_eq!(out.pixel(1, 0), Some([75, 75, 75, 255]));
        // Corners have no 4-neighbor on the spike
        assert_eq!(out.pixel(0, 0), Some([100, 100, 100, 255]));
    }

    #[test]
    fn test_half_rounds_to_even() {
        let mut img = RasterImage::filled(3, 3, [100, 100, 100, 255]).unwrap();
        let offset = img.offset(1, 0);
        img.pixels_mut()[offset..offset + 3].copy_from_slice(&[103, 103, 103]);

        let out = sharpen(&img, 0.5);
        // 100 * 3 - 0.5 * (103 + 100 + 100 + 100) = 98.5
        assert_eq!(out.pixel(1, 1), Some([98, 98, 98, 255]));
    }

    #[test]
    fn test_clamps_to_range() {
        let mut img = RasterImage::filled(3, 1, [0, 0, 0, 255]).unwrap();
        let offset = img.offset(1, 0);
        img.pixels_mut()[offset..offset + 3].copy_from_slice(&[255, 255, 255]);

        let out = sharpen(&img, 1.0);
        assert_eq!(out.pixel(1, 0), Some([255, 255, 255, 255]));
        // 0 * 5 - 255 = -255, clamped
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_amount_clamped_to_one() {
        let pixels = vec![
            10, 10, 10, 255, 200, 200, 200, 255, 10, 10, 10, 255, //
        ];
        let img = RasterImage::new(3, 1, pixels).unwrap();
        assert_eq!(sharpen(&img, 5.0), sharpen(&img, 1.0));
    }

    #[test]
    fn test_alpha_untouched() {
        let pixels = vec![0, 0, 0, 10, 255, 255, 255, 20, 0, 0, 0, 30];
        let img = RasterImage::new(3, 1, pixels).unwrap();
        let out = sharpen(&img, 1.0);
        let alphas: Vec<u8> = out.pixels().chunks_exact(4).map(|p| p[3]).collect();
        assert_eq!(alphas, vec![10, 20, 30]);
    }

    #[test]
    fn test_reads_from_snapshot() {
        // A left-to-right in-place scan without a snapshot would feed the
        // sharpened first pixel into the second one.
        let pixels = vec![
            50, 50, 50, 255, 100, 100, 100, 255, 150, 150, 150, 255, 200, 200, 200, 255,
        ];
        let img = RasterImage::new(4, 1, pixels).unwrap();
        let out = sharpen(&img, 1.0);
        // x=1: 100 * 5 - (50 + 150 + 100 + 100) = 100
        assert_eq!(out.pixel(1, 0), Some([100, 100, 100, 255]));
        // x=2: 150 * 5 - (100 + 200 + 150 + 150) = 150
        assert_eq!(out.pixel(2, 0), Some([150, 150, 150, 255]));
    }

    #[test]
    fn test_sharpen_leaves_source_untouched() {
        let img = RasterImage::new(2, 1, vec![0, 0, 0, 255, 255, 255, 255, 255]).unwrap();
        let copy = img.clone();
        let _ = sharpen(&img, 1.0);
        assert_eq!(img, copy);
    }

    #[test]
    fn test_empty_raster() {
        let img = RasterImage::new(0, 0, vec![]).unwrap();
        assert!(sharpen(&img, 1.0).is_empty());
    }
}
