//! In-memory review store
//!
//! Append-only, insertion-ordered. Readers take a [`Snapshot`]: the list of
//! record handles at one instant, so a later append never shows up in a read
//! that is already filtering. The handles point at the canonical records,
//! which lets annotation land on the stored record rather than a copy.

use chrono::NaiveDateTime;
use rva_common::{Review, Sentiment};
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;

/// A stored review
///
/// Every field is fixed at creation except `sentiment`, which is written at
/// most once.
#[derive(Debug)]
pub struct StoredReview {
    pub id: String,
    pub location: String,
    pub body: String,
    pub timestamp: NaiveDateTime,
    sentiment: OnceLock<Sentiment>,
}

impl StoredReview {
    /// Record without a sentiment yet
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        body: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            body: body.into(),
            timestamp,
            sentiment: OnceLock::new(),
        }
    }

    /// Sentiment, if it has been computed
    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment.get().copied()
    }

    pub fn is_scored(&self) -> bool {
        self.sentiment.get().is_some()
    }

    /// Return the attached sentiment, computing and attaching it first if absent
    ///
    /// Concurrent callers on the same record run `compute` at most once; all
    /// of them observe the attached value.
    pub(crate) fn sentiment_or_init(&self, compute: impl FnOnce() -> Sentiment) -> Sentiment {
        *self.sentiment.get_or_init(compute)
    }

    /// Wire form of a scored record
    pub(crate) fn to_review(&self, sentiment: Sentiment) -> Review {
        Review {
            id: self.id.clone(),
            location: self.location.clone(),
            body: self.body.clone(),
            timestamp: self.timestamp,
            sentiment,
        }
    }
}

/// Ordered view of the store at one instant
pub type Snapshot = Vec<Arc<StoredReview>>;

/// The canonical, process-wide review list
#[derive(Debug, Default)]
pub struct ReviewStore {
    records: RwLock<Vec<Arc<StoredReview>>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated in the given order
    pub fn from_records(records: Vec<StoredReview>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(Arc::new).collect()),
        }
    }

    /// Append one record at the end
    pub async fn append(&self, record: StoredReview) -> Arc<StoredReview> {
        let record = Arc::new(record);
        self.records.write().await.push(Arc::clone(&record));
        record
    }

    /// Every record, in insertion order, as of now
    pub async fn snapshot(&self) -> Snapshot {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
