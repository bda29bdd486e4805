// file: src/fetcher/wordpress.rs
// description: HTTP client for the WordPress pages listing
// reference: https://developer.wordpress.org/rest-api/reference/pages/

use crate::config::ProviderConfig;
use crate::error::FetchError;
use crate::fetcher::PageSource;
use crate::models::RawPage;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

const PAGES_PATH: &str = "/wp-json/wp/v2/pages";

/// Reads one page of published pages. Sites with more than `per_page`
/// published pages are truncated to the first `per_page`.
pub struct WordPressClient {
    client: Client,
    endpoint: String,
    per_page: u32,
}

impl WordPressClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, FetchError> {
        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), PAGES_PATH);

        // A 3xx must surface as a failed fetch rather than be followed.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::none())
            .build()
            .map_err(|source| FetchError::Transport {
                url: endpoint.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint,
            per_page: config.per_page,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PageSource for WordPressClient {
    async fn fetch_pages(&self) -> Result<Vec<RawPage>, FetchError> {
        debug!("Requesting published pages from {}", self.endpoint);

        let per_page = self.per_page.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("per_page", per_page.as_str()), ("status", "publish")])
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.endpoint.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Transport {
            url: self.endpoint.clone(),
            source,
        })?;

        let pages: Vec<RawPage> =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                url: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        debug!("Received {} pages", pages.len());
        Ok(pages)
    }
}
