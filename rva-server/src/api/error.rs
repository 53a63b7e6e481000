//! API error responses
//!
//! Every error renders as `{"error": "<message>"}` with its status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use super::json::to_vec_spaced;
use super::json_response;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required write field is absent or empty
    #[error("Location and ReviewBody are required")]
    MissingFields,

    /// Write names a location outside the accepted set
    #[error("Invalid Location")]
    InvalidLocation,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Unexpected failure; the message is surfaced as-is
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidLocation => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.to_string() });
        match to_vec_spaced(&body) {
            Ok(bytes) => json_response(status, bytes),
            Err(_) => json_response(status, body.to_string().into_bytes()),
        }
    }
}
