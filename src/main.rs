//! tola-social - Open Graph, Twitter Card and JSON-LD metadata for static sites.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod enrich;
mod image;
mod logger;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Thumbnail { args } => cli::thumbnail::run_thumbnail(args, &config),
        Commands::Inspect { image } => cli::thumbnail::run_inspect(image, &config),
    }
}
