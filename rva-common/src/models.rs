//! Review and sentiment models
//!
//! `Review` is the wire shape of a review: every review leaving the service
//! carries its sentiment.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Four-axis sentiment score
///
/// `neg`, `neu` and `pos` are proportions of the text; `compound` is the
/// normalized aggregate in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl Sentiment {
    /// Score of text that carries no sentiment at all
    pub const fn neutral() -> Self {
        Self {
            neg: 0.0,
            neu: 1.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// A review as rendered to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "ReviewId")]
    pub id: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "ReviewBody")]
    pub body: String,

    #[serde(rename = "Timestamp", with = "crate::time::timestamp_format")]
    pub timestamp: NaiveDateTime,

    pub sentiment: Sentiment,
}
