//! HTML utility functions.
//!
//! - `escape_attr()` - HTML entity escaping
//! - `escape_script()` - neutralize `</script>` inside inline JSON

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in an attribute value.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_attr("a & b"), "a &amp; b");
/// assert_eq!(escape_attr("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make text safe to embed inside a `<script>` element.
///
/// Script content is raw text, so entities are not decoded there. Only the
/// `</` sequence can terminate the element early; JSON allows `<\/` as an
/// equivalent spelling.
#[inline]
pub fn escape_script(s: &str) -> Cow<'_, str> {
    if s.contains("</") {
        Cow::Owned(s.replace("</", "<\\/"))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_attr("<script>"), "&lt;script&gt;");
        assert_eq!(escape_attr("a & b"), "a &amp; b");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_no_alloc() {
        assert!(matches!(escape_attr("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_attr_url() {
        assert_eq!(
            escape_attr("https://example.com/?a=1&b=2"),
            "https://example.com/?a=1&amp;b=2"
        );
    }

    #[test]
    fn test_escape_script() {
        assert_eq!(
            escape_script(r#"{"a":"</script><b>"}"#),
            r#"{"a":"<\/script><b>"}"#
        );
        assert!(matches!(escape_script(r#"{"a":1}"#), Cow::Borrowed(_)));
    }
}
