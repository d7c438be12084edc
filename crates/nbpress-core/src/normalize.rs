//! Output normalizer: one escaped text representation per output, or none

use crate::escape::escape_text;
use crate::notebook::Output;
use jupyter_protocol::media::MediaType;

/// Select the textual representation of one output, escaped for markup
///
/// Stream outputs yield their text. Rich outputs yield their `text/plain`
/// representation when one is present; richer representations (images,
/// HTML tables) are intentionally dropped on this path.
#[must_use]
pub fn normalize_output(output: &Output) -> Option<String> {
    match output {
        Output::Stream { text } => Some(escape_text(text)),
        Output::Rich { data } => data.content.iter().find_map(|media| match media {
            MediaType::Plain(text) => Some(escape_text(text)),
            _ => None,
        }),
        // Unknown kinds are skipped, not errors: newer schema revisions
        // may carry kinds this crate has never seen.
        Output::Unsupported { .. } => None,
    }
}
