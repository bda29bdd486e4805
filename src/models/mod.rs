// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod raw_page;
pub mod reply;
pub mod search_result;

pub use document::Document;
pub use raw_page::{RawPage, Rendered};
pub use reply::{ChatReply, Link};
pub use search_result::SearchResult;
