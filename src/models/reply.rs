// file: src/models/reply.rs
// description: answer payload returned to the chat surface

use crate::models::SearchResult;
use serde::{Deserialize, Serialize};

pub const FOUND_REPLY: &str = "Here are the most relevant pages I found:";
pub const NOT_FOUND_REPLY: &str = concat!(
    "I couldn't find a specific page for that. ",
    "Try: hours, library card, printing, events, or contact."
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub links: Vec<Link>,
}

impl From<&SearchResult> for Link {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.document.display_title().to_string(),
            url: result.document.url.clone(),
        }
    }
}

impl ChatReply {
    pub fn from_results(results: &[SearchResult]) -> Self {
        if results.is_empty() {
            return Self::not_found();
        }

        Self {
            reply: FOUND_REPLY.to_string(),
            links: results.iter().map(Link::from).collect(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            reply: NOT_FOUND_REPLY.to_string(),
            links: Vec::new(),
        }
    }
}
