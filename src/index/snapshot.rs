// file: src/index/snapshot.rs
// description: immutable document collection produced by one fetch cycle

use crate::models::Document;
use chrono::{DateTime, TimeDelta, Utc};

/// Every document comes from the same fetch. Snapshots are never mutated;
/// a rebuild replaces the whole value.
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    documents: Vec<Document>,
    built_at: Option<DateTime<Utc>>,
}

impl IndexSnapshot {
    pub fn new(documents: Vec<Document>, built_at: DateTime<Utc>) -> Self {
        Self {
            documents,
            built_at: Some(built_at),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        self.built_at
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Stale when there is nothing to serve or the snapshot is older than `ttl_seconds`.
    /// A `built_at` in the future (clock adjustment) counts as fresh.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        let Some(built_at) = self.built_at else {
            return true;
        };
        if self.documents.is_empty() {
            return true;
        }

        let ttl = TimeDelta::try_seconds(i64::try_from(ttl_seconds).unwrap_or(i64::MAX))
            .unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(built_at) > ttl
    }
}
