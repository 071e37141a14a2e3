//! Internal document key

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::MalformedKeyError;

/// The store's internal key for a persisted document.
///
/// A UUID v4, minted by the store on insert. This type never crosses the
/// repository's public interface: callers only ever see the rendered
/// string form, and the only way back from a string is [`parse`], which
/// enforces the key format.
///
/// [`parse`]: DocumentKey::parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(Uuid);

impl DocumentKey {
    /// Mint a fresh key. Each call yields a distinct key.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a public id string back into a key.
    ///
    /// Rejects anything not in the key format (wrong shape or length)
    /// with `MalformedKeyError`. A well-formed key that matches no
    /// document is not this function's concern.
    pub fn parse(id: &str) -> Result<Self, MalformedKeyError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| MalformedKeyError(id.to_string()))
    }

    /// Render the key as the public id string.
    pub fn to_public_id(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
