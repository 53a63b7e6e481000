//! Sentiment scoring
//!
//! The service treats scoring as an opaque capability: text in, four-axis
//! [`Sentiment`] out. [`LexiconScorer`] is the VADER-backed implementation
//! the server runs with; tests substitute their own scorers through the
//! [`SentimentScorer`] trait.

mod scorer;

pub use scorer::LexiconScorer;

use crate::models::Sentiment;

/// Maps review text to a sentiment score
///
/// Implementations must be deterministic: the same text always yields the
/// same score, and `compound` always lies in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Sentiment;
}
