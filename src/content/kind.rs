use std::fmt;

use serde::{Serialize, Serializer};

use super::{Article, Author, Page};

/// Kinds of content that receive social metadata.
///
/// Declaration order is the enrichment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    Index,
    Author,
    Article,
    Page,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Author => "author",
            Self::Article => "article",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A manifest record tagged with its kind.
#[derive(Debug, Clone, Copy)]
pub enum ContentItem<'a> {
    Index,
    Author(&'a Author),
    Article(&'a Article),
    Page(&'a Page),
}

impl ContentItem<'_> {
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Index => ContentKind::Index,
            Self::Author(_) => ContentKind::Author,
            Self::Article(_) => ContentKind::Article,
            Self::Page(_) => ContentKind::Page,
        }
    }

    /// Articles and pages are keyed by URL, authors by name.
    pub fn id(&self) -> ContentId {
        let key = match self {
            Self::Index => String::new(),
            Self::Author(author) => author.name.clone(),
            Self::Article(article) => article.url.clone(),
            Self::Page(page) => page.url.clone(),
        };
        ContentId {
            kind: self.kind(),
            key,
        }
    }
}

/// Identifier of a content item in the metadata map.
///
/// Displays as `kind:key`, or just `index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId {
    pub kind: ContentKind,
    pub key: String,
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}:{}", self.kind, self.key)
        }
    }
}

impl Serialize for ContentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_id_display() {
        let author = Author {
            name: "alice".into(),
            url: "author/alice.html".into(),
            ..Author::default()
        };
        assert_eq!(ContentItem::Index.id().to_string(), "index");
        assert_eq!(ContentItem::Author(&author).id().to_string(), "author:alice");
    }

    #[test]
    fn test_content_id_orders_by_kind_first() {
        let page = ContentId {
            kind: ContentKind::Page,
            key: "a.html".into(),
        };
        let article = ContentId {
            kind: ContentKind::Article,
            key: "z.html".into(),
        };
        assert!(article < page);
    }
}
