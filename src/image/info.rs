//! Image descriptors.

use std::path::Path;

use image::ImageReader;
use serde::Serialize;

use super::ImageError;
use crate::utils::{mime, url};

/// Descriptor of a stored image, read from the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    /// Absolute URL under the site URL.
    pub url: String,
    /// Path relative to the directory it was probed in, `/`-separated.
    pub relative_path: String,
}

impl ImageInfo {
    /// Read dimensions and format of `base_dir/relative`.
    ///
    /// Only the header is decoded; pixels are never loaded.
    pub fn probe(base_dir: &Path, relative: &Path, site_url: &str) -> Result<Self, ImageError> {
        let path = base_dir.join(relative);
        let reader = ImageReader::open(&path)
            .map_err(ImageError::io(&path))?
            .with_guessed_format()
            .map_err(ImageError::io(&path))?;

        let format = reader.format();
        let (width, height) = reader.into_dimensions().map_err(ImageError::decode(&path))?;
        // dimensions are only readable for a known format
        let mime_type = format.map_or(mime::types::OCTET_STREAM, mime::from_format);

        let relative_path = relative.to_string_lossy().replace('\\', "/");
        Ok(Self {
            width,
            height,
            mime_type: mime_type.to_string(),
            url: url::join(site_url, &relative_path),
            relative_path,
        })
    }

    /// Longer of width and height.
    pub fn side(&self) -> u32 {
        self.width.max(self.height)
    }
}
