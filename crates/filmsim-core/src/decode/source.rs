//! Source image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, Orientation};
use crate::raster::RasterImage;

/// Decode an encoded image into an upright RGBA raster.
///
/// The format is sniffed from the bytes. EXIF orientation, when present, is
/// applied before conversion to RGBA.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized,
/// `DecodeError::CorruptedFile` if decoding fails, and
/// `DecodeError::EmptyImage` if the result has no pixels.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    into_raster(apply_orientation(img, orientation))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn into_raster(img: DynamicImage) -> Result<RasterImage, DecodeError> {
    let raster = RasterImage::from_rgba_image(img.into_rgba8());
    if raster.is_empty() {
        return Err(DecodeError::EmptyImage);
    }
    Ok(raster)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_jpeg, encode_png};

    fn two_by_one() -> RasterImage {
        RasterImage::new(2, 1, vec![255, 0, 0, 255, 0, 255, 0, 128]).unwrap()
    }

    #[test]
    fn test_decode_png() {
        let src = two_by_one();
        let png = encode_png(&src).unwrap();
        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded, src, "PNG is lossless, alpha included");
    }

    #[test]
    fn test_decode_jpeg_is_opaque() {
        let src = RasterImage::filled(8, 8, [120, 60, 30, 200]).unwrap();
        let jpeg = encode_jpeg(&src, 95).unwrap();
        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
        let [r, g, b, a] = decoded.pixel(4, 4).unwrap();
        assert_eq!(a, 255, "JPEG carries no alpha");
        assert!((r as i32 - 120).abs() <= 4);
        assert!((g as i32 - 60).abs() <= 4);
        assert!((b as i32 - 30).abs() <= 4);
    }

    #[test]
    fn test_decode_unknown_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated() {
        let png = encode_png(&RasterImage::filled(16, 16, [1, 2, 3, 4]).unwrap()).unwrap();
        let result = decode_image(&png[..png.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_orientation_without_exif() {
        let png = encode_png(&two_by_one()).unwrap();
        assert_eq!(extract_orientation(&png), Orientation::Normal);
        assert_eq!(extract_orientation(&[0x00, 0x01]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90_swaps_dimensions() {
        let img = DynamicImage::ImageRgba8(two_by_one().to_rgba_image().unwrap());
        let rotated = apply_orientation(img, Orientation::Rotate90CW);
        assert_eq!((rotated.width(), rotated.height()), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let img = DynamicImage::ImageRgba8(two_by_one().to_rgba_image().unwrap());
        let flipped = apply_orientation(img, Orientation::FlipHorizontal).into_rgba8();
        assert_eq!(flipped.get_pixel(0, 0).0, [0, 255, 0, 128]);
        assert_eq!(flipped.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }
}
