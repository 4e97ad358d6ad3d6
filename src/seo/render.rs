//! `<head>` fragment rendering.
//!
//! ```html
//! <meta name="description" content="...">
//! <meta property="og:title" content="...">
//! <meta name="twitter:title" content="...">
//! <script type="application/ld+json">{...}</script>
//! ```
//!
//! Open Graph, `article:` and `fb:` tags use `property`, all others `name`.

use serde_json::Value;

use super::tags::{MetaTags, Tags};
use crate::utils::html::{escape_attr, escape_script};

pub fn render_head(tags: &MetaTags, json_ld: &Value) -> String {
    let mut html = String::with_capacity(2048);

    push_tags(&mut html, &tags.meta_tags);
    push_tags(&mut html, &tags.og_tags);
    push_tags(&mut html, &tags.twitter_tags);

    html.push_str("<script type=\"application/ld+json\">");
    html.push_str(&escape_script(&json_ld.to_string()));
    html.push_str("</script>\n");

    html
}

fn push_tags(html: &mut String, tags: &Tags) {
    for tag in tags {
        html.push_str("<meta ");
        html.push_str(attribute_for(tag.name));
        html.push_str("=\"");
        html.push_str(&escape_attr(tag.name));
        html.push_str("\" content=\"");
        html.push_str(&escape_attr(&tag.content));
        html.push_str("\">\n");
    }
}

fn attribute_for(name: &str) -> &'static str {
    if name.starts_with("og:") || name.starts_with("article:") || name.starts_with("fb:") {
        "property"
    } else {
        "name"
    }
}
