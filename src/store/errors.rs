//! Document store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Faults raised by a document store backend.
///
/// These all surface to callers of the repository as persistence
/// failures; none of them are retried.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Backend cannot be reached (e.g. the file store's path is gone)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// I/O error talking to the backend
    #[error("I/O error: {0}")]
    Io(String),

    /// On-disk data could not be decoded
    #[error("Corrupt store data: {0}")]
    Corrupt(String),

    /// Connection string does not name a known backend
    #[error("Invalid store URI: {0}")]
    InvalidUri(String),
}

/// Rejection raised when a string is not in the store's key format.
///
/// Kept apart from [`StoreError`]: a malformed key is a client-input
/// problem, not a store fault, and the repository maps it differently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed document key: {0}")]
pub struct MalformedKeyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::Unavailable("disk gone".to_string()).to_string(),
            "Store unavailable: disk gone"
        );
        assert_eq!(
            MalformedKeyError("bad-id".to_string()).to_string(),
            "Malformed document key: bad-id"
        );
    }
}
