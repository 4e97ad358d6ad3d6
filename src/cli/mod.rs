//! Command-line interface module.

mod args;
pub mod build;
pub mod thumbnail;

pub use args::{Cli, Commands, ThumbnailArgs};
