//! Public blog record shape

use serde::{Deserialize, Serialize};

use super::document::BlogDocument;

/// A blog record as returned to callers.
///
/// Carries the public `id` assigned at creation time. The store's
/// internal key type never appears here; the repository renders it into
/// the plain string `id` field at every read/write boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
}

impl BlogPost {
    /// Assemble the public record from a rendered public id and the
    /// persisted document.
    pub fn from_parts(id: String, document: BlogDocument) -> Self {
        Self {
            id,
            title: document.title,
            author: document.author,
            url: document.url,
            likes: document.likes,
        }
    }
}
