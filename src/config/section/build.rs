//! `[build]` section configuration.
//!
//! Paths of the build inputs and outputs.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"             # Source images (relative to site root)
//! output = "public"               # Output directory (relative to site root)
//! manifest = "content.json"       # Host content manifest (relative to site root)
//! meta_file = "social-meta.json"  # Metadata records (relative to output)
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::{expand_path, stays_inside};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory holding source images.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Content manifest exported by the host generator.
    pub manifest: PathBuf,

    /// File name of the generated metadata map, inside `output`.
    pub meta_file: PathBuf,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            manifest: "content.json".into(),
            meta_file: "social-meta.json".into(),
        }
    }
}

/// Field paths of the `[build]` section.
pub struct BuildFields {
    pub content: FieldPath,
    pub output: FieldPath,
    pub manifest: FieldPath,
    pub meta_file: FieldPath,
}

impl BuildSectionConfig {
    pub const FIELDS: BuildFields = BuildFields {
        content: FieldPath::new("build.content"),
        output: FieldPath::new("build.output"),
        manifest: FieldPath::new("build.manifest"),
        meta_file: FieldPath::new("build.meta_file"),
    };

    /// Resolve directories and the manifest against the site root.
    ///
    /// `meta_file` stays relative; see [`Self::meta_path`].
    pub fn normalize(&mut self, root: &Path) {
        self.content = expand_path(&self.content, root);
        self.output = expand_path(&self.output, root);
        self.manifest = expand_path(&self.manifest, root);
    }

    /// Absolute path of the metadata file.
    pub fn meta_path(&self) -> PathBuf {
        self.output.join(&self.meta_file)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !stays_inside(&self.meta_file) || self.meta_file.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.meta_file,
                "must be a relative file name inside the output directory",
                format!("e.g.: {} = \"social-meta.json\"", Self::FIELDS.meta_file),
            );
        }

        if self.content.is_dir() {
            return;
        }
        diag.warn(
            Self::FIELDS.content,
            format!("directory `{}` does not exist", self.content.display()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.manifest, PathBuf::from("content.json"));
        assert_eq!(config.build.meta_file, PathBuf::from("social-meta.json"));
    }

    #[test]
    fn test_build_normalize() {
        let mut config = test_parse_config("[build]\ncontent = \"site\"\noutput = \"dist\"");
        config.build.normalize(Path::new("/project"));
        assert_eq!(config.build.content, PathBuf::from("/project/site"));
        assert_eq!(config.build.output, PathBuf::from("/project/dist"));
        assert_eq!(config.build.manifest, PathBuf::from("/project/content.json"));
        assert_eq!(
            config.build.meta_path(),
            PathBuf::from("/project/dist/social-meta.json")
        );
    }

    #[test]
    fn test_absolute_meta_file_rejected() {
        let config = test_parse_config("[build]\nmeta_file = \"/tmp/meta.json\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "build.meta_file");
    }

    #[test]
    fn test_meta_file_cannot_escape_output() {
        let config = test_parse_config("[build]\nmeta_file = \"../meta.json\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "build.meta_file");
    }

    #[test]
    fn test_missing_content_dir_warns() {
        let config = test_parse_config("[build]\ncontent = \"/nonexistent/tola-social\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
