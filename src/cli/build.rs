//! `build` command.
//!
//! Phases:
//! - **Load** - read the content manifest
//! - **Enrich** - social info, tags, JSON-LD and card images per item
//! - **Write** - metadata file inside the output directory
//! - **Report** - summary line, non-zero exit when any item failed

use anyhow::{Context, Result, bail};

use crate::{
    config::SiteConfig,
    content::{ContentKind, Manifest},
    debug,
    enrich::{Enrichment, enrich, write_records},
    log,
};

pub fn build_site(config: &SiteConfig) -> Result<Enrichment> {
    let manifest = Manifest::load(&config.build.manifest)
        .with_context(|| format!("Failed to load manifest {}", config.build.manifest.display()))?;
    debug!("build"; "loaded {} items from {}", manifest.item_count(), config.build.manifest.display());

    let enrichment = enrich(&manifest, config);

    let meta_path = config.build.meta_path();
    write_records(&enrichment, &meta_path)?;
    log!("social"; "{} -> {}", summary(&enrichment), meta_path.display());

    if !enrichment.is_success() {
        bail!(
            "{} failed: {}",
            count_noun(enrichment.failures.len(), "item"),
            enrichment
                .failures
                .iter()
                .map(|f| f.id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(enrichment)
}

/// e.g. `tagged 3 articles, 1 page, 2 authors`
fn summary(enrichment: &Enrichment) -> String {
    let parts: Vec<_> = [
        (ContentKind::Article, "article"),
        (ContentKind::Page, "page"),
        (ContentKind::Author, "author"),
    ]
    .into_iter()
    .map(|(kind, noun)| count_noun(enrichment.count(kind), noun))
    .collect();
    format!("tagged {}", parts.join(", "))
}

fn count_noun(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", if count == 1 { "" } else { "s" })
}
