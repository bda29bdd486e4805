// file: src/text/tokenizer.rs
// description: query and document tokenization
// reference: https://docs.rs/regex

use super::patterns::WORD;

/// Splits `text` into lowercase runs of ASCII letters, digits and apostrophes,
/// left to right. Any other character is a separator.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}
