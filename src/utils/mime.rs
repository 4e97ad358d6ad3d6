//! MIME type detection for raster images.
//!
//! Open Graph wants `og:image:type`, so every probed image carries one.

use image::ImageFormat;

/// Image MIME type constants.
pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const BMP: &str = "image/bmp";

    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// MIME type for a decoded image format.
///
/// Covers the formats the `image` features of this crate can decode.
pub fn from_format(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => types::PNG,
        ImageFormat::Jpeg => types::JPEG,
        ImageFormat::Gif => types::GIF,
        ImageFormat::WebP => types::WEBP,
        ImageFormat::Bmp => types::BMP,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_format() {
        assert_eq!(from_format(ImageFormat::Png), types::PNG);
        assert_eq!(from_format(ImageFormat::Jpeg), types::JPEG);
        assert_eq!(from_format(ImageFormat::WebP), types::WEBP);
        assert_eq!(from_format(ImageFormat::Gif), types::GIF);
        assert_eq!(from_format(ImageFormat::Bmp), types::BMP);
        assert_eq!(from_format(ImageFormat::Farbfeld), types::OCTET_STREAM);
    }
}
