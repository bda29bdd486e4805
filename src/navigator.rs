// file: src/navigator.rs
// description: answers a visitor message with links to matching pages
// reference: request handling flow of the chat endpoint

use crate::config::Config;
use crate::error::Result;
use crate::index::SearchIndex;
use crate::models::ChatReply;
use crate::utils::Validator;
use std::sync::Arc;
use tracing::{debug, warn};

/// Keeps the index fresh and turns ranked pages into a reply.
pub struct Navigator {
    index: Arc<SearchIndex>,
    config: Config,
}

impl Navigator {
    pub fn new(index: Arc<SearchIndex>, config: Config) -> Self {
        Self { index, config }
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let index = SearchIndex::from_config(&config.provider)?;
        Ok(Self::new(Arc::new(index), config))
    }

    pub fn index(&self) -> &Arc<SearchIndex> {
        &self.index
    }

    /// A failed refresh only surfaces when there is nothing cached to answer from.
    pub async fn ensure_fresh(&self) -> Result<()> {
        match self.index.refresh_if_stale(self.config.ttl_seconds()).await {
            Ok(_) => Ok(()),
            Err(e) if !self.index.is_empty() => {
                warn!("Serving stale index after refresh failure: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn answer(&self, message: &str) -> Result<ChatReply> {
        if Validator::is_blank_query(message) {
            return Ok(ChatReply::not_found());
        }

        self.ensure_fresh().await?;

        let results = self.index.search_scored(message, self.config.index.top_k);
        debug!("Answering with {} links", results.len());
        Ok(ChatReply::from_results(&results))
    }
}
