//! HTTP API handlers for rva-server

pub mod error;
pub mod health;
pub mod json;
pub mod reviews;

pub use error::ApiError;
pub use health::health_routes;
pub use reviews::{create_review, list_reviews, method_not_allowed};

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// JSON response with an explicit `Content-Length`
pub fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    let length = HeaderValue::from(body.len());
    (
        status,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CONTENT_LENGTH, length),
        ],
        body,
    )
        .into_response()
}
