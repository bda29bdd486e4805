// file: src/utils/validation.rs
// description: input validation helpers for configuration and queries
// reference: input validation patterns

use crate::error::{NavigatorError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(NavigatorError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_top_k(top_k: usize) -> Result<()> {
        if top_k == 0 {
            return Err(NavigatorError::Validation(
                "top_k must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// A blank query is not an error; callers use this to short-circuit to "no answer".
    pub fn is_blank_query(query: &str) -> bool {
        query.trim().is_empty()
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}
