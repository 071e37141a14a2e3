//! HTTP API error types
//!
//! Error-to-status mapping for the blog routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::repository::RepositoryError;
use crate::validation::ValidationError;

/// HTTP-facing errors for the blog API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Candidate record rejected by validation & normalization
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Delete target id not in the store's identifier format
    #[error("Malformed id: {0}")]
    MalformedId(String),

    /// Store round trip failed; the request fails but the process keeps
    /// serving
    #[error("Persistence failure: {0}")]
    Persistence(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::MalformedIdentifier(id) => ApiError::MalformedId(id),
            RepositoryError::Persistence(store_err) => {
                ApiError::Persistence(store_err.to_string())
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Persistence faults are the only system faults here; client
        // rejections stay out of the log
        if let ApiError::Persistence(detail) = &self {
            Logger::error("store_round_trip_failed", &[("detail", detail.as_str())]);
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
