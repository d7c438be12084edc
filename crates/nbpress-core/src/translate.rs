//! Inline markup translator for narrative cells
//!
//! A fixed, ordered pipeline of pure text substitutions over a restricted
//! markdown dialect: headers, bold, italic, inline code and blank-line
//! paragraphs. The pass order is load-bearing. Headers run longest marker
//! first so `###` is never half-matched by `##`, and bold runs before
//! italic so the double asterisks are consumed before single `*` is
//! considered.
//!
//! The translator never fails: unmatched or malformed markup passes
//! through as literal text. No escaping happens here; callers escape raw
//! text up front if injection from untrusted narrative content is a
//! concern.

use once_cell::sync::Lazy;
use regex::Regex;

// Header substitution is line-anchored and consumes no surrounding
// newlines; levels are tried 6 down to 1.
static HEADER_RULES: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    (1..=6)
        .rev()
        .map(|level| {
            let marker = "#".repeat(level);
            let pattern =
                Regex::new(&format!(r"(?m)^{marker}\s+(.+)$")).expect("header pattern is valid");
            (pattern, format!("<h{level}>$1</h{level}>"))
        })
        .collect()
});

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern is valid"));

static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(.+?)`").expect("inline code pattern is valid"));

/// Translate a narrative text block into a markup fragment
///
/// # Examples
///
/// ```
/// use nbpress_core::translate_markdown;
///
/// assert_eq!(translate_markdown("# Hi"), "<p><h1>Hi</h1></p>");
/// assert_eq!(
///     translate_markdown("**bold** and *italic*"),
///     "<p><strong>bold</strong> and <em>italic</em></p>"
/// );
/// ```
#[must_use]
pub fn translate_markdown(source: &str) -> String {
    let mut content = source.to_owned();

    for (pattern, replacement) in HEADER_RULES.iter() {
        content = pattern.replace_all(&content, replacement.as_str()).into_owned();
    }
    content = BOLD.replace_all(&content, "<strong>$1</strong>").into_owned();
    content = ITALIC.replace_all(&content, "<em>$1</em>").into_owned();
    content = INLINE_CODE.replace_all(&content, "<code>$1</code>").into_owned();

    // Blank-line separated blocks become adjacent paragraphs
    content = content.replace("\n\n", "</p><p>");
    format!("<p>{content}</p>")
}
