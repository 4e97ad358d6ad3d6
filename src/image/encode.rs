//! In-memory encoding with fixed quality settings.
//!
//! Every attempt of the shrink loop and the final file go through
//! [`encode`], so the measured size is exactly the size written.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageFormat, ImageResult};

/// Encode `img` in `format`.
///
/// - JPEG: `quality`, alpha dropped
/// - PNG: best compression, adaptive filtering
/// - WebP: lossless
/// - GIF, BMP: the codec's defaults
pub fn encode(img: &DynamicImage, format: ImageFormat, quality: u8) -> ImageResult<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
            DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?;
        }
        ImageFormat::Png => {
            let encoder =
                PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive);
            img.write_with_encoder(encoder)?;
        }
        ImageFormat::WebP => {
            let encoder = WebPEncoder::new_lossless(&mut buf);
            DynamicImage::ImageRgba8(img.to_rgba8()).write_with_encoder(encoder)?;
        }
        other => img.write_to(&mut Cursor::new(&mut buf), other)?,
    }
    Ok(buf)
}
