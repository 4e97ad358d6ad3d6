//! `thumbnail` and `inspect` commands.
//!
//! Both print their result as JSON on stdout.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use serde::Serialize;

use crate::{
    cli::ThumbnailArgs,
    config::SiteConfig,
    image::{ImageInfo, ImageStore, Thumbnail, ThumbnailRequest},
    utils::path::relative_to,
};

pub fn run_thumbnail(args: &ThumbnailArgs, config: &SiteConfig) -> Result<()> {
    let thumbnail = make_thumbnail(args, config)?;
    print_json(&thumbnail)
}

pub fn run_inspect(image: &Path, config: &SiteConfig) -> Result<()> {
    let info = inspect(image, config)?;
    print_json(&info)
}

fn make_thumbnail(args: &ThumbnailArgs, config: &SiteConfig) -> Result<Thumbnail> {
    let twitter = &config.social.twitter;
    let source = content_relative(&args.image, config)?;

    let destination = match &args.dest {
        Some(dest) => relative_to(dest, &config.build.output).unwrap_or_else(|| dest.clone()),
        None => twitter.image_dir.clone(),
    };

    let mut options = twitter.thumbnail_options();
    if let Some(max_bytes) = args.max_bytes {
        options.max_encoded_bytes = max_bytes;
    }

    let request = ThumbnailRequest {
        source_path: &source,
        destination_directory: &destination,
        options,
    };
    Ok(store(config).thumbnail(&request)?)
}

fn inspect(image: &Path, config: &SiteConfig) -> Result<ImageInfo> {
    let source = content_relative(image, config)?;
    Ok(store(config).probe(&source)?)
}

fn store(config: &SiteConfig) -> ImageStore<'_> {
    ImageStore {
        content_dir: &config.build.content,
        output_dir: &config.build.output,
        site_url: config.site.base_url(),
    }
}

fn content_relative(image: &Path, config: &SiteConfig) -> Result<PathBuf> {
    relative_to(image, &config.build.content).ok_or_else(|| {
        anyhow!(
            "{} is outside the content directory {}",
            image.display(),
            config.build.content.display()
        )
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
