//! Host content manifest.
//!
//! The generator exports its content model as JSON:
//!
//! ```json
//! {
//!   "articles": [{ "title": "Hello", "url": "posts/hello.html", "date": "2024-06-15",
//!                  "summary": "...", "tags": ["rust"], "authors": ["alice"] }],
//!   "pages":    [{ "title": "About", "url": "about.html" }],
//!   "authors":  [{ "name": "alice", "url": "author/alice.html", "picture": "images/alice.jpg" }]
//! }
//! ```
//!
//! Unknown fields are ignored; missing optional fields mean "absent".

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::ContentItem;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error when reading manifest `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid manifest `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub articles: Vec<Article>,
    pub pages: Vec<Page>,
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub title: String,
    /// Site-relative URL.
    pub url: String,
    #[serde(default)]
    pub summary: String,
    /// Overrides `summary` when present.
    pub description: Option<String>,
    pub date: String,
    pub modified: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Author names, resolved against `authors`.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Header image, relative to the content directory.
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub title: String,
    pub url: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub bio: Option<String>,
    /// Profile picture, relative to the content directory.
    pub picture: Option<PathBuf>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub username: Option<String>,
    pub twitter: Option<String>,
    /// Profile URL for `article:author`.
    pub og: Option<String>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content =
            fs::read_to_string(path).map_err(|e| ManifestError::Io(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| ManifestError::Json(path.to_path_buf(), e))
    }

    /// Every item in enrichment order: index, authors, articles, pages.
    pub fn items(&self) -> impl Iterator<Item = ContentItem<'_>> {
        std::iter::once(ContentItem::Index)
            .chain(self.authors.iter().map(ContentItem::Author))
            .chain(self.articles.iter().map(ContentItem::Article))
            .chain(self.pages.iter().map(ContentItem::Page))
    }

    pub fn author(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name == name)
    }

    /// Total number of items, index included.
    pub fn item_count(&self) -> usize {
        1 + self.authors.len() + self.articles.len() + self.pages.len()
    }
}

impl Article {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.summary)
    }
}

impl Page {
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .or(self.summary.as_deref())
            .unwrap_or_default()
    }
}
