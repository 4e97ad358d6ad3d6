//! Twitter Card tags.
//!
//! The card image goes through the thumbnailer first, since Twitter rejects
//! images above its size limit.

use std::path::Path;

use super::info::{InfoDetail, SocialInfo};
use super::tags::Tags;
use crate::config::SiteConfig;
use crate::image::{ImageError, ImageStore, ThumbnailRequest};

pub fn twitter_tags(
    info: &SocialInfo,
    config: &SiteConfig,
    store: &ImageStore<'_>,
) -> Result<Tags, ImageError> {
    let twitter = &config.social.twitter;
    let mut tags = Tags::new();

    tags.push("twitter:title", &info.title);
    tags.push("twitter:description", &info.description);

    if let Some(image) = &info.image {
        let request = ThumbnailRequest {
            source_path: Path::new(&image.relative_path),
            destination_directory: &twitter.image_dir,
            options: twitter.thumbnail_options(),
        };
        let card = store.thumbnail(&request)?.info;

        tags.push("twitter:image", &card.url);
        if twitter.is_large_card(card.width, card.height) {
            tags.push("twitter:card", "summary_large_image");
        }
    }

    tags.push_opt("twitter:site", site_handle(info, config));

    Ok(tags)
}

/// Handle for `twitter:site`.
///
/// - article: first author's handle
/// - profile: the author's own handle
/// - website: handle of `[site].author` in `[authors]`
fn site_handle<'a>(info: &'a SocialInfo, config: &'a SiteConfig) -> Option<&'a str> {
    match &info.detail {
        InfoDetail::Article(article) => article.authors.first()?.twitter.as_deref(),
        InfoDetail::Profile(profile) => profile.twitter.as_deref(),
        InfoDetail::Website => config.author(&config.site.author)?.twitter.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;
    use crate::seo::info::{build_info, tests::Site};
    use image::{ImageFormat, Rgb, RgbImage};

    #[test]
    fn test_small_image_passes_through() {
        let site = Site::new("");
        let ctx = site.ctx();
        let info = build_info(ContentItem::Article(&site.manifest.articles[0]), &ctx).unwrap();
        let tags = twitter_tags(&info, &site.config, &ctx.store).unwrap();

        assert_eq!(tags.get("twitter:title"), Some("Hello"));
        assert_eq!(tags.get("twitter:description"), Some("First post"));
        assert_eq!(
            tags.get("twitter:image"),
            Some("https://example.com/images/hello.png")
        );
        assert_eq!(tags.get("twitter:card"), Some("summary_large_image"));
        assert_eq!(tags.get("twitter:site"), Some("@alice"));
        assert!(!site.config.twitter_image_dir().exists());
    }

    #[test]
    fn test_oversized_image_gets_card_thumbnail() {
        let site = Site::new("[social.twitter]\nimage_max_bytes = 20000\n");
        let mut state = 7u32;
        let noisy = RgbImage::from_fn(400, 300, |_, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let v = (state >> 16) as u8;
            Rgb([v, v.wrapping_mul(3), v.wrapping_add(91)])
        });
        noisy
            .save_with_format(
                site.config.build.content.join("images/hello.png"),
                ImageFormat::Png,
            )
            .unwrap();

        let ctx = site.ctx();
        let info = build_info(ContentItem::Article(&site.manifest.articles[0]), &ctx).unwrap();
        let tags = twitter_tags(&info, &site.config, &ctx.store).unwrap();

        assert_eq!(
            tags.get("twitter:image"),
            Some("https://example.com/images/twitter-cards/hello.png")
        );
        let written = site.config.twitter_image_dir().join("hello.png");
        assert!(std::fs::metadata(written).unwrap().len() <= 20000);
    }

    #[test]
    fn test_small_card_omits_card_type() {
        let site = Site::new("");
        let ctx = site.ctx();
        let info = build_info(ContentItem::Author(&site.manifest.authors[0]), &ctx).unwrap();
        let tags = twitter_tags(&info, &site.config, &ctx.store).unwrap();

        // 100x100 picture
        assert_eq!(tags.get("twitter:card"), None);
        assert_eq!(tags.get("twitter:site"), Some("@alice"));
    }

    #[test]
    fn test_website_uses_site_author_handle() {
        let mut site = Site::new("");
        let ctx = site.ctx();
        let info = build_info(ContentItem::Index, &ctx).unwrap();
        assert_eq!(site_handle(&info, &site.config), Some("@alice"));

        site.config.site.author = "nobody".into();
        assert_eq!(site_handle(&info, &site.config), None);
    }

    #[test]
    fn test_article_without_authors_has_no_site() {
        let site = Site::new("");
        let mut info = build_info(ContentItem::Article(&site.manifest.articles[0]), &site.ctx())
            .unwrap();
        if let InfoDetail::Article(article) = &mut info.detail {
            article.authors.clear();
        }
        info.image = None;
        let tags = twitter_tags(&info, &site.config, &site.ctx().store).unwrap();
        assert_eq!(tags.get("twitter:site"), None);
        assert_eq!(tags.get("twitter:image"), None);
    }
}
