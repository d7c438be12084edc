//! Markup escaping for code and output text

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Matches a bare ampersand, or one already followed by an entity this
// escaper produces. Keeping the latter intact makes the transform
// idempotent: re-escaping rendered text is a no-op.
static AMPERSAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp;|lt;|gt;)?").expect("ampersand pattern is valid"));

/// Escape `&`, `<` and `>` for insertion into a markup fragment
///
/// Every text entering a code or output block passes through here before
/// interpolation, so no raw user text ever reaches the block stream.
///
/// # Examples
///
/// ```
/// use nbpress_core::escape_text;
///
/// assert_eq!(escape_text("x = 1 < 2"), "x = 1 &lt; 2");
/// assert_eq!(escape_text("a & b"), "a &amp; b");
/// ```
#[must_use]
pub fn escape_text(text: &str) -> String {
    let escaped = AMPERSAND.replace_all(text, |caps: &Captures<'_>| {
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            "&amp;".to_string()
        }
    });
    escaped.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_three_characters() {
        assert_eq!(escape_text("a < b > c & d"), "a &lt; b &gt; c &amp; d");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_text("print('hello')"), "print('hello')");
    }

    #[test]
    fn test_comparison_expression() {
        assert_eq!(escape_text("x = 1 < 2"), "x = 1 &lt; 2");
    }

    #[test]
    fn test_reescaping_is_noop() {
        let once = escape_text("<b>&nbsp;</b> & more");
        assert_eq!(escape_text(&once), once);
    }

    #[test]
    fn test_existing_entities_kept() {
        assert_eq!(escape_text("&amp; &lt; &gt;"), "&amp; &lt; &gt;");
    }

    #[test]
    fn test_bare_ampersand_before_word() {
        assert_eq!(escape_text("&ampx"), "&amp;ampx");
        assert_eq!(escape_text("fish & chips"), "fish &amp; chips");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_text(""), "");
    }
}
