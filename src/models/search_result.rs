// file: src/models/search_result.rs
// description: Search result model with overlap scores

use crate::models::Document;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matched page, copied out of the snapshot it was scored against
    pub document: Document,

    /// Token overlap plus title boost, always positive
    pub score: u32,
}

impl SearchResult {
    pub fn new(document: Document, score: u32) -> Self {
        Self { document, score }
    }

    /// Format as a summary string for display
    pub fn format_summary(&self, max_excerpt_chars: usize) -> String {
        format!(
            "Score: {} | {} ({})\n{}\n",
            self.score,
            self.document.display_title(),
            self.document.url,
            Validator::truncate_text(&self.document.excerpt, max_excerpt_chars)
        )
    }
}
