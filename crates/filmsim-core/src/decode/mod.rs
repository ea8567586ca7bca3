//! Source image decoding.
//!
//! Turns encoded bytes (JPEG, PNG, WebP, GIF, BMP) into an RGBA
//! [`RasterImage`](crate::raster::RasterImage), applying EXIF orientation so
//! the raster is upright before any filter sees it.
//!
//! All operations are synchronous and single-threaded; the host decides when
//! to call them.

mod source;
mod types;

pub use source::decode_image;
pub use types::DecodeError;
use types::Orientation;
