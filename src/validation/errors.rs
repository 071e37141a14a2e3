//! Validation error types

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejections produced by validation & normalization.
///
/// These are client-input failures (HTTP 400), never system faults, and
/// are never logged as such.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `title` missing, or present but empty
    #[error("title is required")]
    TitleRequired,

    /// `url` missing, or present but empty
    #[error("url is required")]
    UrlRequired,

    /// The body is not a blog-shaped JSON object
    #[error("Invalid blog record: {0}")]
    InvalidShape(String),
}
