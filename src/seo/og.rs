//! Open Graph tags.
//!
//! ```text
//! fb:app_id?  og:type  og:url  og:title  og:description  og:site_name  og:locale?
//! og:image  og:image:url  og:image:type  og:image:width  og:image:height   (with an image)
//! article:*                                                                 (articles)
//! og:first_name  og:last_name  og:gender  og:username                       (profiles)
//! ```

use super::info::{ArticleDetail, InfoDetail, ProfileDetail, SocialInfo};
use super::tags::Tags;
use crate::config::SiteConfig;

pub fn og_tags(info: &SocialInfo, config: &SiteConfig) -> Tags {
    let mut tags = Tags::new();

    tags.push_opt("fb:app_id", config.social.facebook_app_id.as_deref());
    tags.push("og:type", info.og_type());
    tags.push("og:url", &info.url);
    tags.push("og:title", &info.title);
    tags.push("og:description", &info.description);
    tags.push("og:site_name", &info.site_name);
    tags.push_opt("og:locale", config.site.language.as_deref());

    if let Some(image) = &info.image {
        tags.push("og:image", &image.url);
        tags.push("og:image:url", &image.url);
        tags.push("og:image:type", &image.mime_type);
        tags.push("og:image:width", image.width.to_string());
        tags.push("og:image:height", image.height.to_string());
    }

    match &info.detail {
        InfoDetail::Website => {}
        InfoDetail::Article(article) => push_article(&mut tags, article, &info.site_name),
        InfoDetail::Profile(profile) => push_profile(&mut tags, profile),
    }

    tags
}

fn push_article(tags: &mut Tags, article: &ArticleDetail, site_name: &str) {
    tags.push_opt("article:published_time", article.published_time.as_deref());
    tags.push_opt("article:section", article.section.as_deref());
    tags.push_opt("article:modified_time", article.modified_time.as_deref());

    for author in &article.authors {
        tags.push_opt("article:author", author.profile_url());
    }
    if !article.authors.is_empty() {
        tags.push("article:publisher", site_name);
    }

    for tag in &article.tags {
        tags.push("article:tag", tag);
    }
}

fn push_profile(tags: &mut Tags, profile: &ProfileDetail) {
    tags.push_opt("og:first_name", profile.first_name.as_deref());
    tags.push_opt("og:last_name", profile.last_name.as_deref());
    tags.push_opt("og:gender", profile.gender.as_deref());
    tags.push_opt("og:username", profile.username.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentItem;
    use crate::seo::info::{build_info, tests::Site};

    #[test]
    fn test_article_tags() {
        let site = Site::new("language = \"en_US\"\n[social]\nfacebook_app_id = \"1234\"\n");
        let info =
            build_info(ContentItem::Article(&site.manifest.articles[0]), &site.ctx()).unwrap();
        let tags = og_tags(&info, &site.config);

        let names: Vec<_> = tags.iter().map(|t| t.name).collect();
        assert_eq!(
            &names[..7],
            [
                "fb:app_id",
                "og:type",
                "og:url",
                "og:title",
                "og:description",
                "og:site_name",
                "og:locale"
            ]
        );
        assert_eq!(tags.get("og:type"), Some("article"));
        assert_eq!(tags.get("og:image:type"), Some("image/png"));
        assert_eq!(tags.get("og:image:width"), Some("600"));
        assert_eq!(tags.get("article:published_time"), Some("2024-06-15T08:00:00Z"));
        assert_eq!(tags.get("article:section"), Some("rust"));
        assert_eq!(tags.get("article:modified_time"), Some("2024-06-20"));
        // bob has no profile URL
        assert_eq!(
            tags.get_all("article:author").collect::<Vec<_>>(),
            ["https://example.com/author/alice.html"]
        );
        assert_eq!(tags.get("article:publisher"), Some("Test Site"));
        assert_eq!(tags.get_all("article:tag").collect::<Vec<_>>(), ["rust", "ssg"]);
        assert_eq!(names.last(), Some(&"article:tag"));
    }

    #[test]
    fn test_optional_tags_omitted() {
        let site = Site::new("");
        let info = build_info(ContentItem::Index, &site.ctx()).unwrap();
        let tags = og_tags(&info, &site.config);

        assert_eq!(tags.get("fb:app_id"), None);
        assert_eq!(tags.get("og:locale"), None);
        assert_eq!(tags.get("og:image"), None);
        assert_eq!(tags.get("og:type"), Some("website"));
        assert_eq!(tags.get("og:url"), Some("https://example.com/"));
    }

    #[test]
    fn test_profile_tags() {
        let site = Site::new("");
        let info =
            build_info(ContentItem::Author(&site.manifest.authors[0]), &site.ctx()).unwrap();
        let tags = og_tags(&info, &site.config);

        assert_eq!(tags.get("og:type"), Some("profile"));
        assert_eq!(tags.get("og:first_name"), Some("Alice"));
        assert_eq!(tags.get("og:username"), Some("alice42"));
        assert_eq!(tags.get("og:last_name"), None);
        assert_eq!(tags.get("og:image:height"), Some("100"));
    }
}
