//! Document storage layer
//!
//! Three primitives behind the [`DocumentStore`] trait: `insert`,
//! `find_all`, `delete_by_key`. The backend is chosen once at process
//! start by a connection string:
//!
//! - `mem:` — in-memory store, nothing survives the process
//! - `file:<path>` — JSON file on disk
//!
//! Keys are minted here ([`DocumentKey`], UUID v4) and the key-format
//! gate lives here too ([`DocumentKey::parse`]); the repository owns the
//! translation between keys and public ids.

use std::path::PathBuf;
use std::sync::Arc;

mod errors;
mod file;
mod key;
mod memory;

pub use errors::{MalformedKeyError, StoreError, StoreResult};
pub use file::FileStore;
pub use key::DocumentKey;
pub use memory::MemoryStore;

use crate::blog::BlogDocument;

/// Document store backend trait.
///
/// Each operation is a single round trip; backends provide their own
/// interior locking and guarantee distinct keys across concurrent
/// inserts. No operation is retried here or anywhere above.
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Persist a document, minting and returning its key
    fn insert(&self, document: BlogDocument) -> StoreResult<DocumentKey>;

    /// Return all documents in storage order
    fn find_all(&self) -> StoreResult<Vec<(DocumentKey, BlogDocument)>>;

    /// Remove the document with the given key; absent keys are absorbed
    fn delete_by_key(&self, key: &DocumentKey) -> StoreResult<()>;
}

/// Open the store named by a connection string.
pub fn open_store(uri: &str) -> StoreResult<Arc<dyn DocumentStore>> {
    if uri == "mem:" {
        Ok(Arc::new(MemoryStore::new()))
    } else if let Some(path) = uri.strip_prefix("file:") {
        if path.is_empty() {
            return Err(StoreError::InvalidUri(
                "file: URI requires a path".to_string(),
            ));
        }
        Ok(Arc::new(FileStore::open(PathBuf::from(path))?))
    } else {
        Err(StoreError::InvalidUri(format!(
            "unknown scheme in '{}' (expected 'mem:' or 'file:<path>')",
            uri
        )))
    }
}
