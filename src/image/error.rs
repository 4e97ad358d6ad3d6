//! Image processing errors.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    /// Source is unreadable as a raster image.
    #[error("cannot decode image `{path}`")]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    /// Even the smallest attempted size encodes above the budget.
    #[error("image `{path}` does not fit in {max_bytes} bytes at any size")]
    TooLarge { path: PathBuf, max_bytes: u64 },

    #[error("IO error on `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode image `{path}`")]
    Encode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },
}

impl ImageError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &Path) -> impl FnOnce(::image::ImageError) -> Self + '_ {
        move |source| Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. }
            | Self::TooLarge { path, .. }
            | Self::Io { path, .. }
            | Self::Encode { path, .. } => path,
        }
    }
}
