//! Per-item social info, the common input of every tag provider.
//!
//! | kind    | og:type | image                               | url                  |
//! |---------|---------|-------------------------------------|----------------------|
//! | index   | website | `site.default_image`                | `site.url`           |
//! | page    | website | item image or `site.default_image`  | `site.url` + item url|
//! | article | article | item image or `site.default_image`  | `site.url` + item url|
//! | author  | profile | author picture                      | `site.url` + item url|

use std::path::Path;

use crate::config::SiteConfig;
use crate::content::{Article, Author, ContentItem, Manifest, Page};
use crate::image::{ImageError, ImageInfo, ImageStore};
use crate::utils::{date, url};
use crate::log;

/// Everything the builders read besides the item itself.
#[derive(Clone, Copy)]
pub struct InfoContext<'a> {
    pub config: &'a SiteConfig,
    pub manifest: &'a Manifest,
    pub store: ImageStore<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialInfo {
    pub title: String,
    pub image: Option<ImageInfo>,
    /// Absolute URL of the item.
    pub url: String,
    pub description: String,
    pub site_name: String,
    pub detail: InfoDetail,
}

/// Kind-specific part of [`SocialInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoDetail {
    Website,
    Article(ArticleDetail),
    Profile(ProfileDetail),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDetail {
    /// ISO 8601, absent when the host date is unparseable.
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub section: Option<String>,
    pub tags: Vec<String>,
    pub authors: Vec<AuthorRef>,
}

/// An article author resolved against the manifest and `[authors]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRef {
    pub name: String,
    /// Absolute URL of the author page, when the manifest knows the author.
    pub url: Option<String>,
    pub og: Option<String>,
    pub twitter: Option<String>,
}

impl AuthorRef {
    /// Profile URL for `article:author`: `og`, else the author page.
    pub fn profile_url(&self) -> Option<&str> {
        self.og.as_deref().or(self.url.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDetail {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub username: Option<String>,
    pub twitter: Option<String>,
    pub bio: Option<String>,
}

impl SocialInfo {
    pub const fn og_type(&self) -> &'static str {
        match self.detail {
            InfoDetail::Website => "website",
            InfoDetail::Article(_) => "article",
            InfoDetail::Profile(_) => "profile",
        }
    }
}

/// Build the social info of one item.
pub fn build_info(item: ContentItem<'_>, ctx: &InfoContext<'_>) -> Result<SocialInfo, ImageError> {
    match item {
        ContentItem::Index => index_info(ctx),
        ContentItem::Page(page) => page_info(page, ctx),
        ContentItem::Article(article) => article_info(article, ctx),
        ContentItem::Author(author) => author_info(author, ctx),
    }
}

fn index_info(ctx: &InfoContext<'_>) -> Result<SocialInfo, ImageError> {
    let site = &ctx.config.site;
    Ok(SocialInfo {
        title: site.title.clone(),
        image: probe_image(None, ctx)?,
        url: format!("{}/", site.base_url()),
        description: site.description.clone(),
        site_name: site.title.clone(),
        detail: InfoDetail::Website,
    })
}

fn page_info(page: &Page, ctx: &InfoContext<'_>) -> Result<SocialInfo, ImageError> {
    Ok(SocialInfo {
        title: page.title.clone(),
        image: probe_image(page.image.as_deref(), ctx)?,
        url: page_url(&page.url, ctx),
        description: page.description().to_string(),
        site_name: ctx.config.site.title.clone(),
        detail: InfoDetail::Website,
    })
}

fn article_info(article: &Article, ctx: &InfoContext<'_>) -> Result<SocialInfo, ImageError> {
    let published_time = normalize_date(&article.date, &article.url);
    let modified_time = article
        .modified
        .as_deref()
        .and_then(|d| normalize_date(d, &article.url));

    let authors = article
        .authors
        .iter()
        .map(|name| author_ref(name, ctx))
        .collect();

    Ok(SocialInfo {
        title: article.title.clone(),
        image: probe_image(article.image.as_deref(), ctx)?,
        url: page_url(&article.url, ctx),
        description: article.description().to_string(),
        site_name: ctx.config.site.title.clone(),
        detail: InfoDetail::Article(ArticleDetail {
            published_time,
            modified_time,
            section: article.category.clone(),
            tags: article.tags.clone(),
            authors,
        }),
    })
}

fn author_info(author: &Author, ctx: &InfoContext<'_>) -> Result<SocialInfo, ImageError> {
    let image = match &author.picture {
        Some(picture) => Some(ctx.store.probe(picture)?),
        None => None,
    };
    let handles = ctx.config.author(&author.name);

    Ok(SocialInfo {
        title: author.name.clone(),
        image,
        url: page_url(&author.url, ctx),
        description: author.bio.clone().unwrap_or_default(),
        site_name: ctx.config.site.title.clone(),
        detail: InfoDetail::Profile(ProfileDetail {
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            gender: author.gender.clone(),
            username: author.username.clone(),
            twitter: author
                .twitter
                .clone()
                .or_else(|| handles.and_then(|h| h.twitter.clone())),
            bio: author.bio.clone(),
        }),
    })
}

/// Resolve an author name: manifest profile first, `[authors]` as fallback.
fn author_ref(name: &str, ctx: &InfoContext<'_>) -> AuthorRef {
    let profile = ctx.manifest.author(name);
    let handles = ctx.config.author(name);

    AuthorRef {
        name: name.to_string(),
        url: profile.map(|p| page_url(&p.url, ctx)),
        og: profile
            .and_then(|p| p.og.clone())
            .or_else(|| handles.and_then(|h| h.og.clone())),
        twitter: profile
            .and_then(|p| p.twitter.clone())
            .or_else(|| handles.and_then(|h| h.twitter.clone())),
    }
}

/// Probe the item image, falling back to `site.default_image`.
fn probe_image(image: Option<&Path>, ctx: &InfoContext<'_>) -> Result<Option<ImageInfo>, ImageError> {
    match image.or(ctx.config.site.default_image.as_deref()) {
        Some(path) => ctx.store.probe(path).map(Some),
        None => Ok(None),
    }
}

fn page_url(path: &str, ctx: &InfoContext<'_>) -> String {
    url::join(ctx.config.site.base_url(), path)
}

fn normalize_date(raw: &str, item_url: &str) -> Option<String> {
    let normalized = date::normalize(raw);
    if normalized.is_none() {
        log!("warning"; "{}: unrecognized date `{}`, omitted", item_url, raw);
    }
    normalized
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{AuthorConfig, test_config};
    use image::{ImageFormat, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    pub(crate) const MANIFEST: &str = r#"{
        "articles": [
            {"title": "Hello", "url": "posts/hello.html", "summary": "First post",
             "date": "2024-06-15T10:00:00+02:00", "modified": "2024-06-20",
             "category": "rust", "tags": ["rust", "ssg"], "authors": ["alice", "bob"],
             "image": "images/hello.png"}
        ],
        "pages": [{"title": "About", "url": "about.html", "summary": "About me"}],
        "authors": [{"name": "alice", "url": "author/alice.html", "bio": "Writes Rust",
                     "picture": "images/alice.png", "first_name": "Alice",
                     "username": "alice42"}]
    }"#;

    /// A site with a content dir holding the images `MANIFEST` references.
    pub(crate) struct Site {
        pub _dir: TempDir,
        pub config: SiteConfig,
        pub manifest: Manifest,
    }

    impl Site {
        pub(crate) fn new(extra_config: &str) -> Self {
            let dir = TempDir::new().unwrap();
            let images = dir.path().join("content/images");
            fs::create_dir_all(&images).unwrap();
            for (name, w, h) in [("hello.png", 600, 315), ("alice.png", 100, 100), ("header.png", 300, 150)] {
                RgbImage::new(w, h)
                    .save_with_format(images.join(name), ImageFormat::Png)
                    .unwrap();
            }

            let mut config = test_config(dir.path(), extra_config);
            config.site.author = "alice".into();
            config.authors.insert(
                "alice".into(),
                AuthorConfig {
                    twitter: Some("@alice".into()),
                    og: None,
                },
            );
            let manifest = serde_json::from_str(MANIFEST).unwrap();
            Self {
                _dir: dir,
                config,
                manifest,
            }
        }

        pub(crate) fn ctx(&self) -> InfoContext<'_> {
            InfoContext {
                config: &self.config,
                manifest: &self.manifest,
                store: ImageStore {
                    content_dir: &self.config.build.content,
                    output_dir: &self.config.build.output,
                    site_url: self.config.site.base_url(),
                },
            }
        }
    }

    #[test]
    fn test_article_info() {
        let site = Site::new("");
        let article = &site.manifest.articles[0];
        let info = build_info(ContentItem::Article(article), &site.ctx()).unwrap();

        assert_eq!(info.og_type(), "article");
        assert_eq!(info.url, "https://example.com/posts/hello.html");
        assert_eq!(info.description, "First post");
        assert_eq!(info.site_name, "Test Site");
        let image = info.image.as_ref().unwrap();
        assert_eq!((image.width, image.height), (600, 315));
        assert_eq!(image.url, "https://example.com/images/hello.png");

        let InfoDetail::Article(detail) = &info.detail else {
            panic!("expected article detail");
        };
        assert_eq!(detail.published_time.as_deref(), Some("2024-06-15T08:00:00Z"));
        assert_eq!(detail.modified_time.as_deref(), Some("2024-06-20"));
        assert_eq!(detail.section.as_deref(), Some("rust"));

        // alice: manifest profile + [authors] handle; bob: unknown to both
        let alice = &detail.authors[0];
        assert_eq!(alice.url.as_deref(), Some("https://example.com/author/alice.html"));
        assert_eq!(alice.twitter.as_deref(), Some("@alice"));
        assert_eq!(alice.profile_url(), alice.url.as_deref());
        let bob = &detail.authors[1];
        assert_eq!(bob.profile_url(), None);
        assert_eq!(bob.twitter, None);
    }

    #[test]
    fn test_page_falls_back_to_default_image() {
        let site = Site::new("default_image = \"images/header.png\"\n");
        let info = build_info(ContentItem::Page(&site.manifest.pages[0]), &site.ctx()).unwrap();
        assert_eq!(info.og_type(), "website");
        assert_eq!(info.image.unwrap().relative_path, "images/header.png");
        assert_eq!(info.description, "About me");
    }

    #[test]
    fn test_index_without_default_image() {
        let site = Site::new("");
        let info = build_info(ContentItem::Index, &site.ctx()).unwrap();
        assert_eq!(info.url, "https://example.com/");
        assert_eq!(info.title, "Test Site");
        assert_eq!(info.description, "A test site");
        assert!(info.image.is_none());
    }

    #[test]
    fn test_author_profile() {
        let site = Site::new("");
        let info =
            build_info(ContentItem::Author(&site.manifest.authors[0]), &site.ctx()).unwrap();
        assert_eq!(info.og_type(), "profile");
        assert_eq!(info.description, "Writes Rust");
        let InfoDetail::Profile(profile) = &info.detail else {
            panic!("expected profile detail");
        };
        assert_eq!(profile.first_name.as_deref(), Some("Alice"));
        assert_eq!(profile.last_name, None);
        assert_eq!(profile.twitter.as_deref(), Some("@alice"));
    }

    #[test]
    fn test_invalid_date_omitted() {
        let mut site = Site::new("");
        site.manifest.articles[0].date = "yesterday".into();
        let article = &site.manifest.articles[0];
        let info = build_info(ContentItem::Article(article), &site.ctx()).unwrap();
        let InfoDetail::Article(detail) = info.detail else {
            panic!("expected article detail");
        };
        assert_eq!(detail.published_time, None);
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let mut site = Site::new("");
        site.manifest.pages[0].image = Some("images/missing.png".into());
        let err =
            build_info(ContentItem::Page(&site.manifest.pages[0]), &site.ctx()).unwrap_err();
        assert!(matches!(err, ImageError::Io { .. }));
    }
}
