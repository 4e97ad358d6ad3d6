//! Site configuration management for `social.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── authors    # [authors.<name>]
//! │   ├── build      # [build]
//! │   ├── site       # [site]
//! │   └── social     # [social], [social.twitter]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AuthorConfig, AuthorsConfig, BuildSectionConfig, SiteSectionConfig, SocialSectionConfig,
    TwitterConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing social.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub social: SocialSectionConfig,

    /// Per-author handles keyed by author name
    #[serde(default)]
    pub authors: AuthorsConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    /// The project root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config, &cwd)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = crate::utils::path::normalize_path(&config_path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd);
        config.finalize(cli, &root);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI overrides and resolve paths against `root`.
    fn finalize(&mut self, cli: &Cli, root: &Path) {
        self.root = root.to_path_buf();
        self.apply_cli_options(cli);
        self.build.normalize(root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Twitter card directory inside the output directory.
    pub fn twitter_image_dir(&self) -> PathBuf {
        self.build.output.join(&self.social.twitter.image_dir)
    }

    /// Author handles from `[authors.<name>]`.
    pub fn author(&self, name: &str) -> Option<&AuthorConfig> {
        self.authors.get(name)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and command-specific CLI options.
    fn apply_cli_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.manifest, build_args.manifest.as_ref());
            if let Some(ref url) = build_args.site_url {
                self.site.url = Some(url.clone());
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.social.validate(&mut diag);
        self.validate_authors(&mut diag);

        diag.print_warnings();

        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// The site author should have handles configured for `twitter:site`.
    fn validate_authors(&self, diag: &mut ConfigDiagnostics) {
        let author = &self.site.author;
        if author.is_empty() {
            return;
        }
        match self.authors.get(author) {
            None => diag.warn(
                SiteSectionConfig::FIELDS.author,
                format!("no [authors.{author}] entry, twitter:site is skipped for website pages"),
            ),
            Some(entry) if entry.twitter.is_none() => diag.warn(
                SiteSectionConfig::FIELDS.author,
                format!("[authors.{author}] has no twitter handle"),
            ),
            Some(_) => {}
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config content as-is.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// A validated config rooted at `root`, with `site.url` set.
#[cfg(test)]
pub fn test_config(root: &Path, extra: &str) -> SiteConfig {
    let content = format!(
        "[site]\ntitle = \"Test Site\"\nurl = \"https://example.com\"\ndescription = \"A test site\"\n{extra}"
    );
    let mut config = test_parse_config(&content);
    config.root = root.to_path_buf();
    config.build.normalize(root);
    config
}

// ============================================================================
// tests
// ============================================================================
