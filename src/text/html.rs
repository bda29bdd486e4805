// file: src/text/html.rs
// description: tag stripping and whitespace cleanup for rendered page fields

use super::patterns::{HTML_TAG, WHITESPACE_RUN};

/// Replaces every `<...>` span with a single space. Entities are left encoded.
pub fn strip_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, " ").into_owned()
}

/// Collapses whitespace runs to one space and trims both ends.
pub fn clean_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
