//! Seed data loading
//!
//! Reads the initial reviews from a CSV file with the header columns
//! `ReviewId`, `Location`, `Timestamp` and `ReviewBody` (any order, extra
//! columns ignored). Seed rows are trusted: locations are not validated and
//! identifiers are kept verbatim. A row whose timestamp does not parse is
//! skipped with a warning.

use crate::store::StoredReview;
use rva_common::time::parse_timestamp;
use rva_common::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(rename = "ReviewId")]
    id: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "ReviewBody")]
    body: String,
}

/// Load seed reviews from `path`
///
/// A missing file is not an error: the service starts with no reviews.
pub fn load_seed_file(path: &Path) -> Result<Vec<StoredReview>> {
    if !path.exists() {
        warn!("Seed file not found: {}, starting empty", path.display());
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path)?;
    let records = read_seed(file)?;
    info!("Loaded {} seed reviews from {}", records.len(), path.display());
    Ok(records)
}

/// Parse seed reviews from any CSV source
pub fn read_seed<R: Read>(reader: R) -> Result<Vec<StoredReview>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line, row) in csv_reader.deserialize::<SeedRow>().enumerate() {
        let row = row?;
        match parse_timestamp(&row.timestamp) {
            Ok(timestamp) => {
                records.push(StoredReview::new(row.id, row.location, row.body, timestamp));
            }
            Err(e) => {
                // Header is line 1, so data rows start at 2
                warn!(
                    "Skipping seed row {} (ReviewId {}): bad timestamp {:?}: {}",
                    line + 2,
                    row.id,
                    row.timestamp,
                    e
                );
            }
        }
    }

    Ok(records)
}
