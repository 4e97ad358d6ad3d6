//! Absolute URL construction for emitted metadata.
//!
//! Social crawlers ignore relative URLs, so every `og:url`, `og:image` and
//! `twitter:image` is built by joining `site.url` with a site-relative path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// WHATWG path percent-encode set.
///
/// `%` is left alone so paths that are already encoded pass through.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Check if a string is already an absolute http(s) URL.
#[inline]
pub fn is_absolute(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://") || s.starts_with("//")
}

/// Join a site base URL with a site-relative path.
///
/// Absolute inputs are returned unchanged. Backslashes from Windows paths
/// are turned into `/`.
///
/// # Examples
/// ```ignore
/// join("https://example.com", "posts/hello.html")  -> "https://example.com/posts/hello.html"
/// join("https://example.com/", "/img/a b.png")     -> "https://example.com/img/a%20b.png"
/// join("https://example.com/blog", "")             -> "https://example.com/blog/"
/// ```
pub fn join(base: &str, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let path = path.replace('\\', "/");
    let encoded = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/");

    format!("{base}/{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_simple() {
        assert_eq!(
            join("https://example.com", "posts/hello.html"),
            "https://example.com/posts/hello.html"
        );
    }

    #[test]
    fn test_join_slashes() {
        assert_eq!(
            join("https://example.com/", "/images/a.png"),
            "https://example.com/images/a.png"
        );
    }

    #[test]
    fn test_join_empty_path() {
        assert_eq!(join("https://example.com/blog", ""), "https://example.com/blog/");
    }

    #[test]
    fn test_join_encodes_segments() {
        assert_eq!(
            join("https://example.com", "images/my photo.png"),
            "https://example.com/images/my%20photo.png"
        );
        assert_eq!(
            join("https://example.com", "images/日本.png"),
            "https://example.com/images/%E6%97%A5%E6%9C%AC.png"
        );
    }

    #[test]
    fn test_join_keeps_existing_encoding() {
        assert_eq!(
            join("https://example.com", "images/my%20photo.png"),
            "https://example.com/images/my%20photo.png"
        );
    }

    #[test]
    fn test_join_windows_separators() {
        assert_eq!(
            join("https://example.com", r"images\twitter-cards\a.jpg"),
            "https://example.com/images/twitter-cards/a.jpg"
        );
    }

    #[test]
    fn test_join_absolute_passthrough() {
        assert_eq!(
            join("https://example.com", "https://cdn.example.org/a.png"),
            "https://cdn.example.org/a.png"
        );
    }
}
