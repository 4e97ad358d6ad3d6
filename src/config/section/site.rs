//! `[site]` section configuration.
//!
//! Basic site information shared by every generated tag set.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! url = "https://example.com"
//! description = "A personal blog"
//! author = "alice"
//! language = "en_US"
//! default_image = "images/header.jpg"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used for `og:site_name` and as the publisher name.
    pub title: String,

    /// Absolute base URL (e.g., "https://example.com/blog").
    pub url: Option<String>,

    /// Description of the site index.
    pub description: String,

    /// Default author, keyed into `[authors]` for `twitter:site`.
    pub author: String,

    /// Locale for `og:locale` (e.g., "en_US").
    pub language: Option<String>,

    /// Fallback image (relative to `[build].content`).
    pub default_image: Option<PathBuf>,
}

/// Field paths of the `[site]` section.
pub struct SiteFields {
    pub title: FieldPath,
    pub url: FieldPath,
    pub description: FieldPath,
    pub author: FieldPath,
    pub language: FieldPath,
    pub default_image: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("site.title"),
        url: FieldPath::new("site.url"),
        description: FieldPath::new("site.description"),
        author: FieldPath::new("site.author"),
        language: FieldPath::new("site.language"),
        default_image: FieldPath::new("site.default_image"),
    };

    /// Base URL without a trailing slash (empty when unset).
    pub fn base_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be set
    /// - `url` must be a valid URL with an http(s) scheme and a host
    /// - `default_image` must be relative
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site URL is required to build absolute social URLs",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }

        if let Some(image) = &self.default_image
            && image.is_absolute()
        {
            diag.error_with_hint(
                Self::FIELDS.default_image,
                "must be relative to the content directory",
                format!("e.g.: {} = \"images/header.jpg\"", Self::FIELDS.default_image),
            );
        }

        if self.title.is_empty() {
            diag.warn(Self::FIELDS.title, "empty title, og:site_name will be blank");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_fields() {
        let config = test_parse_config(
            "[site]\ntitle = \"Blog\"\nurl = \"https://example.com/\"\nauthor = \"alice\"\nlanguage = \"en_US\"",
        );
        assert_eq!(config.site.title, "Blog");
        assert_eq!(config.site.base_url(), "https://example.com");
        assert_eq!(config.site.author, "alice");
        assert_eq!(config.site.language.as_deref(), Some("en_US"));
        assert!(config.site.default_image.is_none());
    }

    #[test]
    fn test_missing_url_is_error() {
        let config = test_parse_config("[site]\ntitle = \"Blog\"");
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "site.url");
    }

    #[test]
    fn test_url_scheme_and_host() {
        for bad in ["ftp://example.com", "not a url", "file:///tmp"] {
            let config = test_parse_config(&format!("[site]\ntitle = \"Blog\"\nurl = \"{bad}\""));
            let mut diag = crate::config::ConfigDiagnostics::new();
            config.site.validate(&mut diag);
            assert!(diag.has_errors(), "{bad} should be rejected");
        }

        let config = test_parse_config("[site]\ntitle = \"Blog\"\nurl = \"http://localhost:8000\"");
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_absolute_default_image_rejected() {
        let config = test_parse_config(
            "[site]\ntitle = \"Blog\"\nurl = \"https://example.com\"\ndefault_image = \"/etc/header.jpg\"",
        );
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "site.default_image");
    }
}
