// file: src/models/document.rs
// description: normalized page document held by the search index
// reference: internal data structures

use crate::models::RawPage;
use crate::text::{clean_text, strip_tags, tokenize};
use serde::{Deserialize, Serialize};

/// One published page. `tokens` is derived once from the title and the
/// tag-stripped excerpt and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(title: &str, url: &str, excerpt: &str) -> Self {
        Self::from_raw(&RawPage::new(title, url, excerpt))
    }

    pub fn from_raw(page: &RawPage) -> Self {
        let title = page.title_html();
        let excerpt_text = strip_tags(page.excerpt_html());
        let tokens = tokenize(&format!("{} {}", title, excerpt_text));

        Self {
            title: clean_text(title),
            url: page.link().to_string(),
            excerpt: clean_text(&excerpt_text),
            tokens,
        }
    }

    /// Title tokens, recomputed on demand for title boosting.
    pub fn title_tokens(&self) -> Vec<String> {
        tokenize(&self.title)
    }

    /// Label for a link: the title, or the URL when the page has no title.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}
