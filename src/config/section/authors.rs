//! `[authors.<name>]` tables.
//!
//! Per-author social handles, looked up when the manifest profile lacks them.
//!
//! ```toml
//! [authors.alice]
//! twitter = "@alice"
//! og = "https://example.com/author/alice.html"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Twitter handle used for `twitter:site`.
    pub twitter: Option<String>,
    /// Profile URL used for `article:author`.
    pub og: Option<String>,
}

pub type AuthorsConfig = FxHashMap<String, AuthorConfig>;
