//! Common error types for the review analyzer

use thiserror::Error;

/// Common result type for review analyzer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the review analyzer crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file decoding error (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
