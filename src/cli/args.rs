//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Social metadata and Twitter card images for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: social.toml)
    #[arg(short = 'C', long, global = true, default_value = "social.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Enrich every manifest item and write the metadata file
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Shrink a single image under a byte budget
    #[command(visible_alias = "t")]
    Thumbnail {
        #[command(flatten)]
        args: ThumbnailArgs,
    },

    /// Print the image info of a file without resizing it
    Inspect {
        /// Image path (relative to the content directory or absolute)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        image: PathBuf,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    ///
    /// Example:
    ///   tola-social build --site-url "https://example.github.io/blog"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Content manifest path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,
}

/// Thumbnail command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ThumbnailArgs {
    /// Source image (relative to the content directory or absolute)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub image: PathBuf,

    /// Byte budget, defaults to `[social.twitter].image_max_bytes`
    #[arg(long)]
    pub max_bytes: Option<u64>,

    /// Destination directory, defaults to the Twitter card directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dest: Option<PathBuf>,
}
