//! schema.org structured data.
//!
//! | kind    | `@type`                          |
//! |---------|----------------------------------|
//! | index   | `WebSite`                        |
//! | page    | `WebPage`                        |
//! | article | `BlogPosting`                    |
//! | author  | `ProfilePage` with a `Person`    |

use serde_json::{Map, Value, json};

use super::info::{ArticleDetail, InfoDetail, ProfileDetail, SocialInfo};
use crate::config::SiteConfig;
use crate::content::ContentKind;

const CONTEXT: &str = "https://schema.org";

/// Build the JSON-LD object of one item.
pub fn json_ld(kind: ContentKind, info: &SocialInfo, config: &SiteConfig) -> Value {
    let mut obj = match (&info.detail, kind) {
        (InfoDetail::Article(article), _) => blog_posting(info, article, config),
        (InfoDetail::Profile(profile), _) => profile_page(info, profile),
        (InfoDetail::Website, ContentKind::Index) => web_site(info, config),
        (InfoDetail::Website, _) => web_page(info, config),
    };
    obj.insert("@context".into(), CONTEXT.into());
    Value::Object(obj)
}

fn blog_posting(info: &SocialInfo, article: &ArticleDetail, config: &SiteConfig) -> Map<String, Value> {
    let mut obj = base("BlogPosting", info);
    obj.insert("headline".into(), info.title.clone().into());
    obj.insert("mainEntityOfPage".into(), info.url.clone().into());
    insert_opt(&mut obj, "datePublished", article.published_time.as_deref());
    insert_opt(&mut obj, "dateModified", article.modified_time.as_deref());
    insert_opt(&mut obj, "articleSection", article.section.as_deref());
    if !article.tags.is_empty() {
        obj.insert("keywords".into(), article.tags.join(", ").into());
    }

    let authors: Vec<Value> = article
        .authors
        .iter()
        .map(|author| {
            let mut person = Map::new();
            person.insert("@type".into(), "Person".into());
            person.insert("name".into(), author.name.clone().into());
            insert_opt(&mut person, "url", author.profile_url());
            Value::Object(person)
        })
        .collect();
    if !authors.is_empty() {
        obj.insert("author".into(), authors.into());
    }

    obj.insert("publisher".into(), organization(config));
    obj
}

fn profile_page(info: &SocialInfo, profile: &ProfileDetail) -> Map<String, Value> {
    let mut person = Map::new();
    person.insert("@type".into(), "Person".into());
    person.insert("name".into(), info.title.clone().into());
    person.insert("url".into(), info.url.clone().into());
    insert_opt(&mut person, "givenName", profile.first_name.as_deref());
    insert_opt(&mut person, "familyName", profile.last_name.as_deref());
    insert_opt(&mut person, "gender", profile.gender.as_deref());
    insert_opt(&mut person, "alternateName", profile.username.as_deref());
    insert_opt(&mut person, "description", profile.bio.as_deref());
    if let Some(image) = &info.image {
        person.insert("image".into(), image.url.clone().into());
    }
    if let Some(handle) = &profile.twitter {
        let handle = handle.trim_start_matches('@');
        person.insert("sameAs".into(), json!([format!("https://twitter.com/{handle}")]));
    }

    let mut obj = Map::new();
    obj.insert("@type".into(), "ProfilePage".into());
    obj.insert("url".into(), info.url.clone().into());
    obj.insert("mainEntity".into(), Value::Object(person));
    obj
}

fn web_page(info: &SocialInfo, config: &SiteConfig) -> Map<String, Value> {
    let mut obj = base("WebPage", info);
    obj.insert("name".into(), info.title.clone().into());
    obj.insert(
        "isPartOf".into(),
        json!({
            "@type": "WebSite",
            "name": info.site_name,
            "url": format!("{}/", config.site.base_url()),
        }),
    );
    obj
}

fn web_site(info: &SocialInfo, config: &SiteConfig) -> Map<String, Value> {
    let mut obj = base("WebSite", info);
    obj.insert("name".into(), info.title.clone().into());
    insert_opt(&mut obj, "inLanguage", config.site.language.as_deref());
    obj
}

/// `@type`, url, description and image.
fn base(schema_type: &str, info: &SocialInfo) -> Map<String, Value> {
    let mut obj = Map::new();
    obj.insert("@type".into(), schema_type.into());
    obj.insert("url".into(), info.url.clone().into());
    insert_opt(&mut obj, "description", Some(info.description.as_str()));
    if let Some(image) = &info.image {
        obj.insert(
            "image".into(),
            json!({
                "@type": "ImageObject",
                "url": image.url,
                "width": image.width,
                "height": image.height,
            }),
        );
    }
    obj
}

fn organization(config: &SiteConfig) -> Value {
    json!({
        "@type": "Organization",
        "name": config.site.title,
        "url": format!("{}/", config.site.base_url()),
    })
}

fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value
        && !value.is_empty()
    {
        obj.insert(key.into(), value.into());
    }
}
