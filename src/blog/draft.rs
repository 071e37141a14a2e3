//! Candidate blog record decoded from a request body

use serde::Deserialize;

/// A candidate blog record as supplied by the caller.
///
/// Every field is optional at this stage; validation decides which
/// absences are acceptable and which fields get defaults. Unknown fields
/// in the body are ignored, and there is no `id` here: identifiers are
/// assigned by the store and never accepted from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}
