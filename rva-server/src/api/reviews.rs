//! Review list and create endpoints
//!
//! GET reads the store through the query engine; POST validates a
//! form-encoded body and appends a new, already scored review. Any other
//! method is answered with 405.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::StatusCode,
    response::Response,
};
use rva_common::locations::is_valid_location;
use rva_common::{time, uuid_utils};
use tracing::{debug, info, warn};

use super::json::{to_vec_indented, to_vec_spaced};
use super::{json_response, ApiError};
use crate::query::{filter_reviews, first_value, ReviewQuery};
use crate::store::StoredReview;
use crate::AppState;

/// GET (any path except `/health`)
///
/// Query parameters `location`, `start_date`, `end_date`, all optional.
/// Never fails on input: bad dates are ignored and an unknown location
/// yields an empty list.
pub async fn list_reviews(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let pairs = raw
        .as_deref()
        .map(decode_pairs_lossy)
        .unwrap_or_default();
    let query = ReviewQuery::from_pairs(&pairs);

    let snapshot = state.store.snapshot().await;
    let reviews = filter_reviews(&snapshot, &query, &state.annotator);
    debug!(?query, total = snapshot.len(), matched = reviews.len(), "Listed reviews");

    let body = to_vec_indented(&reviews)?;
    Ok(json_response(StatusCode::OK, body))
}

/// POST (any path except `/health`)
///
/// Form fields `Location` and `ReviewBody`. Responds 201 with the created
/// review, 400 on missing fields or an unknown location, 500 when the body
/// cannot be decoded.
pub async fn create_review(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let text = std::str::from_utf8(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(text).map_err(|e| ApiError::Internal(e.to_string()))?;

    let (Some(location), Some(review_body)) = (
        first_value(&pairs, "Location"),
        first_value(&pairs, "ReviewBody"),
    ) else {
        warn!("Rejected review: missing Location or ReviewBody");
        return Err(ApiError::MissingFields);
    };

    if !is_valid_location(location) {
        warn!(location, "Rejected review: invalid location");
        return Err(ApiError::InvalidLocation);
    }

    let record = StoredReview::new(
        uuid_utils::generate_review_id(),
        location,
        review_body,
        time::now(),
    );
    let review = state.annotator.ensure_scored(&record);
    state.store.append(record).await;

    info!(
        review_id = %review.id,
        location = %review.location,
        compound = review.sentiment.compound,
        "Created review"
    );

    let body = to_vec_spaced(&review)?;
    Ok(json_response(StatusCode::CREATED, body))
}

/// Any other method on a review route
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Decode a query string; on malformed input treat it as carrying no parameters
fn decode_pairs_lossy(raw: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(raw).unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring undecodable query string");
        Vec::new()
    })
}
