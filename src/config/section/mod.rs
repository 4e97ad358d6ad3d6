//! Configuration section definitions.
//!
//! Each module corresponds to a section in `social.toml`:
//!
//! | Module    | TOML Section       | Purpose                            |
//! |-----------|--------------------|------------------------------------|
//! | `site`    | `[site]`           | Title, URL, author, default image  |
//! | `build`   | `[build]`          | Content, output and manifest paths |
//! | `social`  | `[social]`         | Facebook id, Twitter card settings |
//! | `authors` | `[authors.<name>]` | Per-author handles                 |

mod authors;
mod build;
mod site;
mod social;

pub use authors::{AuthorConfig, AuthorsConfig};
pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
pub use social::{SocialSectionConfig, TwitterConfig};
