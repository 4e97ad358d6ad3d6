//! Shared helpers: dates, HTML escaping, MIME types, paths and URLs.

pub mod date;
pub mod html;
pub mod mime;
pub mod path;
pub mod url;
