//! Required-field rules and defaulting for candidate blog records

use serde_json::Value;

use crate::blog::{BlogDocument, BlogDraft};

use super::errors::{ValidationError, ValidationResult};

/// Validate a candidate record and normalize it for persistence.
///
/// Rules:
/// - `title` must be present and non-empty; a blank-but-present value is
///   rejected exactly like an absent one
/// - `url` must be present and non-empty, same blank rule
/// - `likes` defaults to 0 when absent, passes through unchanged when
///   present
/// - `author` passes through unchanged, including absence
///
/// Pure function: no side effects, no I/O.
pub fn validate(draft: BlogDraft) -> ValidationResult<BlogDocument> {
    let title = match draft.title {
        Some(title) if !title.is_empty() => title,
        _ => return Err(ValidationError::TitleRequired),
    };

    let url = match draft.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(ValidationError::UrlRequired),
    };

    Ok(BlogDocument {
        title,
        author: draft.author,
        url,
        likes: draft.likes.unwrap_or(0),
    })
}

/// Decode a raw JSON body into a candidate record, then validate it.
///
/// A body that is not a blog-shaped object (wrong field types, not an
/// object at all) is a client-input failure, same as a missing required
/// field.
pub fn validate_body(body: Value) -> ValidationResult<BlogDocument> {
    let draft: BlogDraft = serde_json::from_value(body)
        .map_err(|e| ValidationError::InvalidShape(e.to_string()))?;
    validate(draft)
}
