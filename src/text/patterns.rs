// file: src/text/patterns.rs
// description: compiled regex patterns for page text normalization
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII letters, digits and apostrophes; everything else separates tokens
    pub static ref WORD: Regex = Regex::new(
        r"[a-zA-Z0-9']+"
    ).expect("WORD regex is valid");

    // Any `<...>` span, not an HTML parser
    pub static ref HTML_TAG: Regex = Regex::new(
        r"<[^>]+>"
    ).expect("HTML_TAG regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");
}
