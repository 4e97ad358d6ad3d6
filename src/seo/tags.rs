//! Ordered tag lists.
//!
//! Keys may repeat (`article:tag`, `article:author`), so a list of pairs is
//! used instead of a map.

use serde::Serialize;

/// One `<meta>` tag: `name`/`property` plus `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub name: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, content: impl Into<String>) {
        self.0.push(Tag {
            name,
            content: content.into(),
        });
    }

    /// Push only when `content` is present and non-empty.
    pub fn push_opt<S: AsRef<str>>(&mut self, name: &'static str, content: Option<S>) {
        if let Some(content) = content
            && !content.as_ref().is_empty()
        {
            self.push(name, content.as_ref());
        }
    }

    /// First value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.content.as_str())
    }

    /// Every value of `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |t| t.name == name)
            .map(|t| t.content.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tag sets of one item, grouped by provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetaTags {
    pub og_tags: Tags,
    pub twitter_tags: Tags,
    pub meta_tags: Tags,
}
