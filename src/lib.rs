// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod fetcher;
pub mod index;
pub mod models;
pub mod navigator;
pub mod text;
pub mod utils;

pub use config::{Config, IndexConfig, ProviderConfig};
pub use error::{FetchError, NavigatorError, Result};
pub use fetcher::{PageSource, WordPressClient};
pub use index::{DEFAULT_TOP_K, IndexSnapshot, SearchIndex};
pub use models::{ChatReply, Document, Link, RawPage, SearchResult};
pub use navigator::Navigator;
pub use text::{clean_text, strip_tags, tokenize};
pub use utils::{OperationTimer, Validator};
