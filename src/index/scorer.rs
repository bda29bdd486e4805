// file: src/index/scorer.rs
// description: token-overlap scoring with title boost

use crate::models::{Document, SearchResult};
use crate::text::tokenize;
use std::collections::HashSet;

pub const TITLE_BOOST: u32 = 2;

/// Unique, case-folded query tokens.
#[derive(Debug, Clone, Default)]
pub struct QueryTokens(HashSet<String>);

impl QueryTokens {
    pub fn parse(query: &str) -> Self {
        Self(tokenize(query).into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Occurrences in `tokens` that are query tokens, repeats included.
    fn count_hits(&self, tokens: &[String]) -> u32 {
        tokens.iter().filter(|t| self.contains(t)).count() as u32
    }
}

/// Overlap over the full token list plus `TITLE_BOOST` per title token hit.
pub fn score_document(document: &Document, query: &QueryTokens) -> u32 {
    let overlap = query.count_hits(&document.tokens);
    let title_hits = query.count_hits(&document.title_tokens());
    overlap + TITLE_BOOST * title_hits
}

/// Scores every document, drops zero scores, and sorts by score descending.
/// Equal scores keep the order of `documents`.
pub fn rank(documents: &[Document], query: &QueryTokens, top_k: usize) -> Vec<SearchResult> {
    if query.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(u32, &Document)> = documents
        .iter()
        .map(|doc| (score_document(doc, query), doc))
        .filter(|(score, _)| *score > 0)
        .collect();

    // slice::sort_by is stable
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(top_k)
        .map(|(score, doc)| SearchResult::new(doc.clone(), score))
        .collect()
}
