// file: src/index/search_index.rs
// description: cached page index with atomic rebuild and ranked search

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::fetcher::{PageSource, WordPressClient};
use crate::index::scorer::{QueryTokens, rank};
use crate::index::snapshot::IndexSnapshot;
use crate::models::{Document, SearchResult};
use crate::utils::OperationTimer;
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub use crate::config::DEFAULT_TOP_K;

const SLOW_REBUILD: Duration = Duration::from_secs(5);

/// Holds the current snapshot behind a single swappable `Arc`. Readers clone
/// the `Arc` and never observe a partially built collection. Rebuilds are
/// serialized by `rebuild_lock`, which is never taken by searches.
pub struct SearchIndex {
    source: Arc<dyn PageSource>,
    current: RwLock<Arc<IndexSnapshot>>,
    rebuild_lock: Mutex<()>,
}

impl SearchIndex {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            source,
            current: RwLock::new(Arc::new(IndexSnapshot::default())),
            rebuild_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let client = WordPressClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// The snapshot searches currently run against.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot().built_at()
    }

    /// Pure freshness check; deciding to rebuild is up to the caller.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        self.snapshot().is_stale(now, ttl_seconds)
    }

    /// Fetches every page and swaps in a new snapshot. On failure the
    /// previous snapshot keeps serving.
    pub async fn rebuild(&self) -> Result<()> {
        let _guard = self.rebuild_lock.lock().await;
        self.rebuild_locked().await
    }

    /// Rebuilds only if stale. Callers that arrive while another rebuild is in
    /// flight wait for it and then re-check instead of fetching again.
    /// Returns whether this call performed the rebuild.
    pub async fn refresh_if_stale(&self, ttl_seconds: u64) -> Result<bool> {
        if !self.is_stale(Utc::now(), ttl_seconds) {
            return Ok(false);
        }

        let _guard = self.rebuild_lock.lock().await;
        if !self.is_stale(Utc::now(), ttl_seconds) {
            debug!("Index refreshed by a concurrent caller");
            return Ok(false);
        }

        self.rebuild_locked().await?;
        Ok(true)
    }

    async fn rebuild_locked(&self) -> Result<()> {
        let timer = OperationTimer::new("index rebuild");

        let documents = match self.source.fetch_documents().await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(
                    "Index rebuild failed, keeping {} cached pages: {}",
                    self.len(),
                    e
                );
                return Err(e.into());
            }
        };
        timer.warn_if_slow(SLOW_REBUILD, "page fetch");

        let count = documents.len();
        let snapshot = Arc::new(IndexSnapshot::new(documents, Utc::now()));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot;

        timer.finish_with_count(count);
        info!("Index rebuilt with {} pages", count);
        Ok(())
    }

    /// Ranked matches with their scores, at most `top_k`.
    pub fn search_scored(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let query_tokens = QueryTokens::parse(query);
        let snapshot = self.snapshot();

        if query_tokens.is_empty() || snapshot.is_empty() {
            debug!(
                "Search skipped: {} query tokens, {} pages",
                query_tokens.len(),
                snapshot.len()
            );
            return Vec::new();
        }

        let results = rank(snapshot.documents(), &query_tokens, top_k);
        debug!(
            "Search matched {} of {} pages for {} query tokens",
            results.len(),
            snapshot.len(),
            query_tokens.len()
        );
        results
    }

    pub fn search(&self, query: &str, top_k: usize) -> Vec<Document> {
        self.search_scored(query, top_k)
            .into_iter()
            .map(|result| result.document)
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{FetchError, NavigatorError};
    use crate::models::RawPage;
    use async_trait::async_trait;
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays queued responses in order; once drained, repeats the last success.
    pub(crate) struct FakeSource {
        responses: std::sync::Mutex<VecDeque<std::result::Result<Vec<RawPage>, FetchError>>>,
        last: std::sync::Mutex<Vec<RawPage>>,
        delay: Duration,
        pub(crate) calls: AtomicUsize,
    }

    impl FakeSource {
        pub(crate) fn new(
            responses: Vec<std::result::Result<Vec<RawPage>, FetchError>>,
        ) -> Arc<Self> {
            Self::with_delay(responses, Duration::ZERO)
        }

        pub(crate) fn with_delay(
            responses: Vec<std::result::Result<Vec<RawPage>, FetchError>>,
            delay: Duration,
        ) -> Arc<Self> {
            Arc::new(Self {
                responses: std::sync::Mutex::new(responses.into()),
                last: std::sync::Mutex::new(Vec::new()),
                delay,
                calls: AtomicUsize::new(0),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageSource for FakeSource {
        async fn fetch_pages(&self) -> std::result::Result<Vec<RawPage>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let next = self.responses.lock().unwrap().pop_front();
            match next {
                Some(Ok(pages)) => {
                    *self.last.lock().unwrap() = pages.clone();
                    Ok(pages)
                }
                Some(Err(e)) => Err(e),
                None => Ok(self.last.lock().unwrap().clone()),
            }
        }
    }

    pub(crate) fn library_pages() -> Vec<RawPage> {
        vec![
            RawPage::new("Library Hours", "https://x.org/hours/", "<p>open daily</p>"),
            RawPage::new(
                "Printing Services",
                "https://x.org/printing/",
                "<p>print documents hours</p>",
            ),
            RawPage::new("Events", "https://x.org/events/", "<p>story time for kids</p>"),
        ]
    }

    pub(crate) fn bad_gateway() -> FetchError {
        FetchError::Status {
            status: StatusCode::BAD_GATEWAY,
            url: "https://x.org/wp-json/wp/v2/pages".to_string(),
        }
    }

    fn urls(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.url.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_index_returns_nothing() {
        let index = SearchIndex::new(FakeSource::new(vec![]));
        assert!(index.is_empty());
        assert!(index.built_at().is_none());
        assert!(index.is_stale(Utc::now(), 3600));
        assert!(index.search("hours", DEFAULT_TOP_K).is_empty());
    }

    #[tokio::test]
    async fn test_rebuild_then_search() {
        let index = SearchIndex::new(FakeSource::new(vec![Ok(library_pages())]));
        index.rebuild().await.unwrap();

        assert_eq!(index.len(), 3);
        let results = index.search("hours", DEFAULT_TOP_K);
        assert_eq!(urls(&results), vec!["https://x.org/hours/", "https://x.org/printing/"]);

        let scored = index.search_scored("hours", DEFAULT_TOP_K);
        assert_eq!(scored[0].score, 3);
        assert_eq!(scored[1].score, 1);
    }

    #[tokio::test]
    async fn test_blank_query_returns_nothing() {
        let index = SearchIndex::new(FakeSource::new(vec![Ok(library_pages())]));
        index.rebuild().await.unwrap();

        assert!(index.search("", DEFAULT_TOP_K).is_empty());
        assert!(index.search("   \n", DEFAULT_TOP_K).is_empty());
        assert!(index.search("zebra", DEFAULT_TOP_K).is_empty());
    }

    #[tokio::test]
    async fn test_results_respect_top_k() {
        let index = SearchIndex::new(FakeSource::new(vec![Ok(library_pages())]));
        index.rebuild().await.unwrap();

        let results = index.search("hours events", 1);
        assert_eq!(urls(&results), vec!["https://x.org/hours/"]);
    }

    #[tokio::test]
    async fn test_failed_rebuild_keeps_previous_snapshot() {
        let source = FakeSource::new(vec![Ok(library_pages()), Err(bad_gateway())]);
        let index = SearchIndex::new(source.clone());

        index.rebuild().await.unwrap();
        let before = index.snapshot();

        let err = index.rebuild().await.unwrap_err();
        assert!(matches!(err, NavigatorError::Fetch(FetchError::Status { .. })));

        let after = index.snapshot();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(after.built_at(), before.built_at());
        assert_eq!(after.documents(), before.documents());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_first_rebuild_stays_empty() {
        let index = SearchIndex::new(FakeSource::new(vec![Err(bad_gateway())]));
        assert!(index.rebuild().await.is_err());
        assert!(index.is_empty());
        assert!(index.built_at().is_none());
    }

    #[tokio::test]
    async fn test_staleness_after_rebuild() {
        let index = SearchIndex::new(FakeSource::new(vec![Ok(library_pages())]));
        index.rebuild().await.unwrap();

        let built_at = index.built_at().unwrap();
        assert!(!index.is_stale(built_at, 60));
        assert!(!index.is_stale(built_at + TimeDelta::seconds(60), 60));
        assert!(index.is_stale(built_at + TimeDelta::seconds(61), 60));
    }

    #[tokio::test]
    async fn test_rebuild_is_deterministic() {
        let source = FakeSource::new(vec![Ok(library_pages()), Ok(library_pages())]);
        let index = SearchIndex::new(source);

        index.rebuild().await.unwrap();
        let first = index.snapshot();
        index.rebuild().await.unwrap();
        let second = index.snapshot();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.documents(), second.documents());
    }

    #[tokio::test]
    async fn test_reader_keeps_old_snapshot_across_rebuild() {
        let updated = vec![RawPage::new("Makerspace", "https://x.org/make/", "3d printers")];
        let index = SearchIndex::new(FakeSource::new(vec![Ok(library_pages()), Ok(updated)]));

        index.rebuild().await.unwrap();
        let held = index.snapshot();
        index.rebuild().await.unwrap();

        assert_eq!(held.len(), 3);
        assert_eq!(index.len(), 1);
        assert!(index.search("hours", 5).is_empty());
        assert_eq!(urls(&index.search("printers", 5)), vec!["https://x.org/make/"]);
    }

    #[tokio::test]
    async fn test_refresh_if_stale_skips_fresh_index() {
        let source = FakeSource::new(vec![Ok(library_pages())]);
        let index = SearchIndex::new(source.clone());

        assert!(index.refresh_if_stale(3600).await.unwrap());
        assert!(!index.refresh_if_stale(3600).await.unwrap());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_refreshes_fetch_once() {
        let source = FakeSource::with_delay(vec![Ok(library_pages())], Duration::from_millis(50));
        let index = SearchIndex::new(source.clone());

        let (a, b) = tokio::join!(index.refresh_if_stale(3600), index.refresh_if_stale(3600));
        let performed = [a.unwrap(), b.unwrap()];

        assert_eq!(performed.iter().filter(|p| **p).count(), 1);
        assert_eq!(source.calls(), 1);
        assert_eq!(index.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_searches_during_rebuild_see_whole_snapshots() {
        let updated: Vec<RawPage> = (0..50)
            .map(|i| {
                RawPage::new(
                    &format!("Room {i}"),
                    &format!("https://x.org/room/{i}/"),
                    "room",
                )
            })
            .collect();
        let source = FakeSource::with_delay(
            vec![Ok(library_pages()), Ok(updated)],
            Duration::from_millis(20),
        );
        let index = Arc::new(SearchIndex::new(source));
        index.rebuild().await.unwrap();

        let writer = {
            let index = Arc::clone(&index);
            tokio::spawn(async move { index.rebuild().await })
        };

        let mut readers = Vec::new();
        for _ in 0..8 {
            let index = Arc::clone(&index);
            readers.push(tokio::spawn(async move {
                for _ in 0..50 {
                    let len = index.snapshot().len();
                    assert!(len == 3 || len == 50, "observed partial snapshot of {len}");
                    tokio::task::yield_now().await;
                }
            }));
        }

        writer.await.unwrap().unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
        assert_eq!(index.len(), 50);
    }
}
