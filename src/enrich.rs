//! Enrichment driver: every manifest item in, one `MetaRecord` out.
//!
//! Items are processed in manifest order (index, authors, articles, pages).
//! An item whose image cannot be read or shrunk is logged and recorded as a
//! failure; the remaining items are still processed.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::config::SiteConfig;
use crate::content::{ContentId, ContentItem, ContentKind, Manifest};
use crate::image::{ImageError, ImageStore};
use crate::log;
use crate::logger::ProgressLine;
use crate::seo::{InfoContext, MetaRecord, make_record};

/// Records keyed by content id, ordered by kind then key.
pub type MetaMap = BTreeMap<ContentId, MetaRecord>;

#[derive(Debug)]
pub struct EnrichFailure {
    pub id: ContentId,
    pub error: ImageError,
}

#[derive(Debug, Default)]
pub struct Enrichment {
    pub records: MetaMap,
    pub failures: Vec<EnrichFailure>,
}

impl Enrichment {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of records of one kind.
    pub fn count(&self, kind: ContentKind) -> usize {
        self.records.keys().filter(|id| id.kind == kind).count()
    }
}

/// Build metadata for every item of `manifest`.
pub fn enrich(manifest: &Manifest, config: &SiteConfig) -> Enrichment {
    let ctx = InfoContext {
        config,
        manifest,
        store: ImageStore {
            content_dir: &config.build.content,
            output_dir: &config.build.output,
            site_url: config.site.base_url(),
        },
    };

    let progress = ProgressLine::new(&[
        (counter_name(ContentKind::Author), manifest.authors.len()),
        (counter_name(ContentKind::Article), manifest.articles.len()),
        (counter_name(ContentKind::Page), manifest.pages.len()),
    ]);

    let mut enrichment = Enrichment::default();
    for item in manifest.items() {
        enrich_item(item, &ctx, &mut enrichment);
        progress.inc(counter_name(item.kind()));
    }
    progress.finish();

    enrichment
}

/// The first item with a given id wins; later duplicates are skipped.
fn enrich_item(item: ContentItem<'_>, ctx: &InfoContext<'_>, enrichment: &mut Enrichment) {
    let id = item.id();
    if enrichment.records.contains_key(&id) || enrichment.failures.iter().any(|f| f.id == id) {
        log!("warning"; "{}: duplicate id, keeping the first item", id);
        return;
    }
    match make_record(item, ctx) {
        Ok(record) => {
            enrichment.records.insert(id, record);
        }
        Err(error) => {
            log!("error"; "{}: {}", id, error);
            enrichment.failures.push(EnrichFailure { id, error });
        }
    }
}

const fn counter_name(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Index => "index",
        ContentKind::Author => "authors",
        ContentKind::Article => "articles",
        ContentKind::Page => "pages",
    }
}

/// Write the records as pretty JSON, replacing `path` atomically.
pub fn write_records(enrichment: &Enrichment, path: &Path) -> Result<()> {
    #[derive(Serialize)]
    struct MetaFile<'a> {
        records: &'a MetaMap,
        failed: Vec<String>,
    }

    let file = MetaFile {
        records: &enrichment.records,
        failed: enrichment.failures.iter().map(|f| f.id.to_string()).collect(),
    };
    let json = serde_json::to_vec_pretty(&file).context("Failed to serialize metadata")?;

    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(&json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::info::tests::Site;
    use serde_json::Value;

    #[test]
    fn test_enrich_all_items() {
        let site = Site::new("");
        let enrichment = enrich(&site.manifest, &site.config);

        assert!(enrichment.is_success());
        assert_eq!(enrichment.records.len(), site.manifest.item_count());
        assert_eq!(enrichment.count(ContentKind::Article), 1);
        assert_eq!(enrichment.count(ContentKind::Author), 1);

        let ids: Vec<_> = enrichment.records.keys().map(ToString::to_string).collect();
        assert_eq!(
            ids,
            ["index", "author:alice", "article:posts/hello.html", "page:about.html"]
        );
    }

    #[test]
    fn test_failure_is_isolated() {
        let mut site = Site::new("");
        site.manifest.pages[0].image = Some("images/missing.png".into());
        let enrichment = enrich(&site.manifest, &site.config);

        assert!(!enrichment.is_success());
        assert_eq!(enrichment.failures.len(), 1);
        assert_eq!(enrichment.failures[0].id.to_string(), "page:about.html");
        assert!(matches!(enrichment.failures[0].error, ImageError::Io { .. }));
        // everything else still produced
        assert_eq!(enrichment.records.len(), site.manifest.item_count() - 1);
        assert_eq!(enrichment.count(ContentKind::Page), 0);
    }

    #[test]
    fn test_duplicate_id_keeps_first_item() {
        let mut site = Site::new("");
        let mut copy = site.manifest.pages[0].clone();
        copy.title = "About again".into();
        site.manifest.pages.push(copy);

        let enrichment = enrich(&site.manifest, &site.config);
        assert!(enrichment.is_success());
        assert_eq!(enrichment.count(ContentKind::Page), 1);
        let id = ContentItem::Page(&site.manifest.pages[0]).id();
        assert_eq!(
            enrichment.records[&id].tags.og_tags.get("og:title"),
            Some("About")
        );
    }

    #[test]
    fn test_author_without_picture_is_not_a_failure() {
        let mut site = Site::new("");
        site.manifest.authors[0].picture = None;
        let enrichment = enrich(&site.manifest, &site.config);

        assert!(enrichment.is_success());
        let id = ContentItem::Author(&site.manifest.authors[0]).id();
        assert_eq!(enrichment.records[&id].tags.og_tags.get("og:image"), None);
    }

    #[test]
    fn test_write_records() {
        let mut site = Site::new("");
        site.manifest.pages[0].image = Some("images/missing.png".into());
        let enrichment = enrich(&site.manifest, &site.config);

        let path = site.config.build.meta_path();
        write_records(&enrichment, &path).unwrap();

        let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let record = &json["records"]["article:posts/hello.html"];
        assert_eq!(record["url"], "https://example.com/posts/hello.html");
        assert_eq!(record["json_ld"]["@type"], "BlogPosting");
        assert!(record["head"].as_str().unwrap().contains("og:title"));
        assert_eq!(json["failed"], serde_json::json!(["page:about.html"]));

        // rewritten in place
        write_records(&Enrichment::default(), &path).unwrap();
        let json: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["records"], serde_json::json!({}));
    }
}
