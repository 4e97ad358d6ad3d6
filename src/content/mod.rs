//! Content model exported by the host generator.
//!
//! - [`manifest`]: JSON manifest of articles, pages and authors
//! - `kind`: closed set of content kinds and their identifiers

mod kind;
pub mod manifest;

pub use kind::{ContentId, ContentItem, ContentKind};
pub use manifest::{Article, Author, Manifest, Page};
