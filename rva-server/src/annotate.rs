//! Sentiment annotation
//!
//! Attaches a score to a stored record the first time it is needed and
//! reuses it afterwards. The scorer runs at most once per record, even when
//! several requests reach the same unscored record at the same time.

use crate::store::StoredReview;
use rva_common::{Review, SentimentScorer};
use std::sync::Arc;
use tracing::trace;

/// Ensures records carry a sentiment score
#[derive(Clone)]
pub struct Annotator {
    scorer: Arc<dyn SentimentScorer>,
}

impl Annotator {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    /// Return the record with its sentiment, scoring the stored record if needed
    pub fn ensure_scored(&self, record: &StoredReview) -> Review {
        let sentiment = record.sentiment_or_init(|| {
            trace!(review_id = %record.id, "Scoring review");
            self.scorer.score(&record.body)
        });
        record.to_review(sentiment)
    }
}

impl std::fmt::Debug for Annotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Annotator").finish_non_exhaustive()
    }
}
