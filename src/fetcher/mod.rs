// file: src/fetcher/mod.rs
// description: document fetcher seam and provider client exports
// reference: internal module structure

pub mod wordpress;

pub use wordpress::WordPressClient;

use crate::error::FetchError;
use crate::models::{Document, RawPage};
use async_trait::async_trait;

/// Source of published pages. The whole listing is fetched in one call;
/// an error means nothing was retrieved.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_pages(&self) -> Result<Vec<RawPage>, FetchError>;

    /// Fetches and normalizes every page, preserving provider order.
    async fn fetch_documents(&self) -> Result<Vec<Document>, FetchError> {
        let pages = self.fetch_pages().await?;
        Ok(pages.iter().map(Document::from_raw).collect())
    }
}
