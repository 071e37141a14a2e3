//! Persisted blog document shape

use serde::{Deserialize, Serialize};

/// A validated, normalized blog record as held by the document store.
///
/// This is the shape that crosses the repository/store boundary: `title`
/// and `url` are guaranteed non-empty, `likes` is always present. There
/// is no identifier here; the store keys documents itself and the
/// repository renders that key into the public `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}
