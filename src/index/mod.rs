// file: src/index/mod.rs
// description: in-memory page index module exports
// reference: internal module structure

pub mod scorer;
pub mod search_index;
pub mod snapshot;

pub use scorer::{QueryTokens, rank, score_document};
pub use search_index::{DEFAULT_TOP_K, SearchIndex};
pub use snapshot::IndexSnapshot;
