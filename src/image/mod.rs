//! Image processing utilities.
//!
//! # Modules
//!
//! - [`info`]: image descriptors (`ImageInfo`)
//! - [`thumbnail`]: adaptive thumbnailing under a byte budget
//! - `encode`: fixed-quality in-memory encoding

mod encode;
mod error;
pub mod info;
pub mod thumbnail;

pub use error::ImageError;
pub use info::ImageInfo;
pub use thumbnail::{ImageStore, Thumbnail, ThumbnailOptions, ThumbnailRequest};
