//! `[social]` section configuration.
//!
//! Platform-specific settings for the generated tags.
//!
//! # Example
//!
//! ```toml
//! [social]
//! facebook_app_id = "1234"
//!
//! [social.twitter]
//! image_max_bytes = 1000000         # Twitter card image size ceiling
//! resize_step = 64                  # Pixels removed per shrink attempt
//! quality = 95                      # JPEG quality of re-encoded images
//! image_dir = "images/twitter-cards" # Relative to `[build].output`
//! large_card_min_width = 280
//! large_card_min_height = 150
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::ThumbnailOptions;
use crate::utils::path::stays_inside;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSectionConfig {
    /// Facebook application id, emitted as `fb:app_id` when set.
    pub facebook_app_id: Option<String>,

    pub twitter: TwitterConfig,
}

/// `[social.twitter]` settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    /// Maximum encoded size of a card image in bytes.
    pub image_max_bytes: u64,

    /// Side length decrement between shrink attempts.
    pub resize_step: u32,

    /// Encoder quality (1-100).
    pub quality: u8,

    /// Thumbnail directory, relative to the output directory.
    pub image_dir: PathBuf,

    /// Minimum width for `summary_large_image`.
    pub large_card_min_width: u32,

    /// Minimum height for `summary_large_image`.
    pub large_card_min_height: u32,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            image_max_bytes: 1000 * 1000,
            resize_step: 64,
            quality: 95,
            image_dir: "images/twitter-cards".into(),
            large_card_min_width: 280,
            large_card_min_height: 150,
        }
    }
}

/// Field paths of the `[social]` section.
pub struct SocialFields {
    pub facebook_app_id: FieldPath,
    pub image_max_bytes: FieldPath,
    pub resize_step: FieldPath,
    pub quality: FieldPath,
    pub image_dir: FieldPath,
}

impl SocialSectionConfig {
    pub const FIELDS: SocialFields = SocialFields {
        facebook_app_id: FieldPath::new("social.facebook_app_id"),
        image_max_bytes: FieldPath::new("social.twitter.image_max_bytes"),
        resize_step: FieldPath::new("social.twitter.resize_step"),
        quality: FieldPath::new("social.twitter.quality"),
        image_dir: FieldPath::new("social.twitter.image_dir"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let twitter = &self.twitter;

        if twitter.image_max_bytes == 0 {
            diag.error_with_hint(
                Self::FIELDS.image_max_bytes,
                "must be greater than 0",
                "Twitter accepts card images up to 5 MB, e.g.: 1000000",
            );
        }
        if twitter.resize_step == 0 {
            diag.error_with_hint(
                Self::FIELDS.resize_step,
                "must be greater than 0",
                format!("the default is {}", TwitterConfig::default().resize_step),
            );
        }
        if !(1..=100).contains(&twitter.quality) {
            diag.error(
                Self::FIELDS.quality,
                format!("{} is out of range 1..=100", twitter.quality),
            );
        }
        if !stays_inside(&twitter.image_dir) {
            diag.error_with_hint(
                Self::FIELDS.image_dir,
                "must be a relative path inside the output directory",
                "absolute paths and `..` are not allowed",
            );
        }
        if let Some(id) = &self.facebook_app_id
            && id.trim().is_empty()
        {
            diag.warn(Self::FIELDS.facebook_app_id, "empty value, fb:app_id is skipped");
        }
    }
}

impl TwitterConfig {
    /// Thumbnailer settings for card images.
    pub fn thumbnail_options(&self) -> ThumbnailOptions {
        ThumbnailOptions {
            max_encoded_bytes: self.image_max_bytes,
            step: self.resize_step,
            quality: self.quality,
        }
    }

    /// Whether an image is big enough for `summary_large_image`.
    pub fn is_large_card(&self, width: u32, height: u32) -> bool {
        width >= self.large_card_min_width && height >= self.large_card_min_height
    }
}
