//! Repository error types

use thiserror::Error;

use crate::store::StoreError;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised by the record repository.
///
/// The two variants travel very differently: a malformed identifier is a
/// client-input rejection (HTTP 400), while a persistence fault is a
/// server-side failure (HTTP 500) that propagates without retries and
/// leaves the process serving.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Delete target is not in the store's identifier format
    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),

    /// The store round trip failed
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_to_persistence() {
        let err = RepositoryError::from(StoreError::Unavailable("down".to_string()));
        assert!(matches!(err, RepositoryError::Persistence(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RepositoryError::MalformedIdentifier("nope".to_string()).to_string(),
            "Malformed identifier: nope"
        );
    }
}
