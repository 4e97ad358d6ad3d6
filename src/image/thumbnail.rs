//! Adaptive thumbnailing under a byte budget.
//!
//! ```text
//! dest exists?          -> Cached       (no write)
//! source <= budget?     -> PassThrough  (no write)
//! side = max(w, h)
//! loop:
//!   encode(resize(side)) <= budget? -> write dest, Generated
//!   side -= step
//!   side == 0?                      -> TooLarge (no write)
//! ```
//!
//! Resizing always starts from the decoded source so quality does not
//! degrade across attempts.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::error::{ImageFormatHint, UnsupportedError};
use image::imageops::FilterType;
use image::ImageReader;
use serde::Serialize;
use tempfile::NamedTempFile;

use super::{ImageError, ImageInfo, encode::encode};
use crate::{debug, log};

/// Encoder and budget settings for one thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailOptions {
    /// Ceiling on the re-encoded file size.
    pub max_encoded_bytes: u64,
    /// Side length removed per attempt.
    pub step: u32,
    /// Encoder quality (JPEG).
    pub quality: u8,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            max_encoded_bytes: 1000 * 1000,
            step: 64,
            quality: 95,
        }
    }
}

/// One thumbnail to produce.
#[derive(Debug, Clone)]
pub struct ThumbnailRequest<'a> {
    /// Source image, relative to the store's content directory.
    pub source_path: &'a Path,
    /// Destination directory, relative to the store's output directory.
    pub destination_directory: &'a Path,
    pub options: ThumbnailOptions,
}

/// How a thumbnail was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ThumbnailOrigin {
    /// The destination already existed.
    Cached,
    /// The source was already within budget and is used as-is.
    PassThrough,
    /// Written by the shrink loop.
    Generated { side: u32, attempts: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub info: ImageInfo,
    pub origin: ThumbnailOrigin,
}

/// Where images are read from and written to, and the URL they are served under.
#[derive(Debug, Clone, Copy)]
pub struct ImageStore<'a> {
    pub content_dir: &'a Path,
    pub output_dir: &'a Path,
    pub site_url: &'a str,
}

impl ImageStore<'_> {
    /// Describe an image under the content directory.
    pub fn probe(&self, relative: &Path) -> Result<ImageInfo, ImageError> {
        ImageInfo::probe(self.content_dir, relative, self.site_url)
    }

    /// Produce an image no larger than `request.options.max_encoded_bytes`.
    ///
    /// The destination is `destination_directory/<source file name>`.
    pub fn thumbnail(&self, request: &ThumbnailRequest<'_>) -> Result<Thumbnail, ImageError> {
        let options = request.options;
        let source = self.content_dir.join(request.source_path);
        let dest_rel = destination_for(request)?;
        let dest = self.output_dir.join(&dest_rel);

        if dest.is_file() {
            debug!("thumbnail"; "cached {}", dest_rel.display());
            return Ok(Thumbnail {
                info: ImageInfo::probe(self.output_dir, &dest_rel, self.site_url)?,
                origin: ThumbnailOrigin::Cached,
            });
        }

        let source_size = fs::metadata(&source).map_err(ImageError::io(&source))?.len();
        if source_size <= options.max_encoded_bytes {
            return Ok(Thumbnail {
                info: self.probe(request.source_path)?,
                origin: ThumbnailOrigin::PassThrough,
            });
        }

        let fitted = shrink_to_fit(&source, &options)?;
        write_atomic(&dest, &fitted.bytes)?;
        log!(
            "thumbnail";
            "{} -> {} ({} -> {} bytes)",
            request.source_path.display(),
            dest_rel.display(),
            source_size,
            fitted.bytes.len()
        );

        Ok(Thumbnail {
            info: ImageInfo::probe(self.output_dir, &dest_rel, self.site_url)?,
            origin: ThumbnailOrigin::Generated {
                side: fitted.side,
                attempts: fitted.attempts,
            },
        })
    }
}

fn destination_for(request: &ThumbnailRequest<'_>) -> Result<PathBuf, ImageError> {
    let Some(name) = request.source_path.file_name() else {
        return Err(ImageError::Io {
            path: request.source_path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no file name"),
        });
    };
    Ok(request.destination_directory.join(name))
}

/// Side lengths tried by the shrink loop: `initial`, `initial - step`, ... while > 0.
pub fn shrink_steps(initial: u32, step: u32) -> impl Iterator<Item = u32> {
    let step = step.max(1);
    std::iter::successors(Some(initial).filter(|&s| s > 0), move |&side| {
        side.checked_sub(step).filter(|&s| s > 0)
    })
}

/// Result of a successful shrink loop.
struct Fitted {
    bytes: Vec<u8>,
    side: u32,
    attempts: usize,
}

fn shrink_to_fit(path: &Path, options: &ThumbnailOptions) -> Result<Fitted, ImageError> {
    let reader = ImageReader::open(path)
        .map_err(ImageError::io(path))?
        .with_guessed_format()
        .map_err(ImageError::io(path))?;
    let format = reader.format();
    let img = reader.decode().map_err(ImageError::decode(path))?;
    let format = format.ok_or_else(|| ImageError::Decode {
        path: path.to_path_buf(),
        source: image::ImageError::Unsupported(UnsupportedError::from(ImageFormatHint::Unknown)),
    })?;

    let initial = img.width().max(img.height());
    for (i, side) in shrink_steps(initial, options.step).enumerate() {
        let bytes = if side >= initial {
            encode(&img, format, options.quality)
        } else {
            encode(
                &img.resize(side, side, FilterType::Lanczos3),
                format,
                options.quality,
            )
        }
        .map_err(|source| ImageError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("thumbnail"; "side {} -> {} bytes", side, bytes.len());
        if bytes.len() as u64 <= options.max_encoded_bytes {
            return Ok(Fitted {
                bytes,
                side,
                attempts: i + 1,
            });
        }
    }

    Err(ImageError::TooLarge {
        path: path.to_path_buf(),
        max_bytes: options.max_encoded_bytes,
    })
}

/// Write through a temp file in the destination directory, then rename.
fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), ImageError> {
    let dir = dest.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir).map_err(ImageError::io(dir))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(ImageError::io(dir))?;
    tmp.write_all(bytes).map_err(ImageError::io(tmp.path()))?;
    tmp.persist(dest).map_err(|e| ImageError::Io {
        path: dest.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
