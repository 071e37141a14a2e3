//! In-memory document store backend

use std::sync::RwLock;

use crate::blog::BlogDocument;

use super::errors::{StoreError, StoreResult};
use super::key::DocumentKey;
use super::DocumentStore;

/// Document store backed by process memory.
///
/// Selected by the `mem:` connection string. Holds documents in
/// insertion order behind an `RwLock`; this lock is the backend's own
/// serialization guarantee the core relies on (concurrent inserts get
/// distinct keys, concurrent deletes stay idempotent).
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<(DocumentKey, BlogDocument)>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, document: BlogDocument) -> StoreResult<DocumentKey> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;

        let key = DocumentKey::mint();
        documents.push((key, document));
        Ok(key)
    }

    fn find_all(&self) -> StoreResult<Vec<(DocumentKey, BlogDocument)>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;

        Ok(documents.clone())
    }

    fn delete_by_key(&self, key: &DocumentKey) -> StoreResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;

        // Absent keys are absorbed without complaint
        documents.retain(|(k, _)| k != key);
        Ok(())
    }
}
