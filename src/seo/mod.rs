//! Social metadata generation.
//!
//! ```text
//! ContentItem ──build_info──▶ SocialInfo ─┬─ og_tags ──────┐
//!                                         ├─ twitter_tags ─┤─▶ MetaTags ─┐
//!                                         ├─ common_tags ──┘             ├─▶ render_head
//!                                         └─ json_ld ────────────────────┘
//! ```

mod common;
pub mod info;
mod jsonld;
mod og;
mod render;
mod tags;
mod twitter;

pub use info::{InfoContext, SocialInfo, build_info};
pub use tags::MetaTags;

use serde::Serialize;
use serde_json::Value;

use crate::content::ContentItem;
use crate::image::ImageError;

/// Everything generated for one content item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaRecord {
    /// Absolute URL of the item.
    pub url: String,
    #[serde(flatten)]
    pub tags: MetaTags,
    pub json_ld: Value,
    /// Ready-to-insert `<head>` fragment.
    pub head: String,
}

/// Build the full metadata record of one item.
pub fn make_record(item: ContentItem<'_>, ctx: &InfoContext<'_>) -> Result<MetaRecord, ImageError> {
    let info = build_info(item, ctx)?;
    let tags = make_tags(&info, ctx)?;
    let json_ld = jsonld::json_ld(item.kind(), &info, ctx.config);
    let head = render::render_head(&tags, &json_ld);

    Ok(MetaRecord {
        url: info.url,
        tags,
        json_ld,
        head,
    })
}

/// Run every tag provider over `info`.
pub fn make_tags(info: &SocialInfo, ctx: &InfoContext<'_>) -> Result<MetaTags, ImageError> {
    Ok(MetaTags {
        og_tags: og::og_tags(info, ctx.config),
        twitter_tags: twitter::twitter_tags(info, ctx.config, &ctx.store)?,
        meta_tags: common::common_tags(info),
    })
}
