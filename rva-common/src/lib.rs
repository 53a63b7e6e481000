//! # RVA Common Library
//!
//! Shared code for the review analyzer service including:
//! - Review and sentiment models
//! - The fixed set of accepted review locations
//! - Sentiment scoring (scorer trait and the lexicon scorer)
//! - Configuration resolution
//! - Timestamp and identifier utilities

pub mod config;
pub mod error;
pub mod locations;
pub mod models;
pub mod sentiment;
pub mod time;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use models::{Review, Sentiment};
pub use sentiment::{LexiconScorer, SentimentScorer};
