//! Plain `<meta name=...>` tags.

use super::info::SocialInfo;
use super::tags::Tags;

pub fn common_tags(info: &SocialInfo) -> Tags {
    let mut tags = Tags::new();
    tags.push("description", &info.description);
    tags
}
