//! JSON-on-disk document store backend

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::blog::BlogDocument;

use super::errors::{StoreError, StoreResult};
use super::key::DocumentKey;
use super::DocumentStore;

/// Document store persisted as a single JSON file.
///
/// Selected by the `file:<path>` connection string. The whole collection
/// is loaded at open and rewritten after every mutation; fine at this
/// scale, where a collection is at most a handful of records. Insertion
/// order survives the round trip because the file holds a JSON array.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    documents: RwLock<Vec<(DocumentKey, BlogDocument)>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file does
    /// not exist yet.
    pub fn open(path: PathBuf) -> StoreResult<Self> {
        let documents = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e))),
        };

        Ok(Self {
            path,
            documents: RwLock::new(documents),
        })
    }

    fn persist(&self, documents: &[(DocumentKey, BlogDocument)]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(documents)
            .map_err(|e| StoreError::Io(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(StoreError::Unavailable(format!(
                    "store directory missing: {}",
                    parent.display()
                )));
            }
        }

        fs::write(&self.path, content)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.path.display(), e)))
    }
}

impl DocumentStore for FileStore {
    fn insert(&self, document: BlogDocument) -> StoreResult<DocumentKey> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;

        // Persist a candidate collection first and commit to memory only
        // on success, so a failed write leaves no phantom record behind
        let key = DocumentKey::mint();
        let mut candidate = documents.clone();
        candidate.push((key, document));
        self.persist(&candidate)?;
        *documents = candidate;
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

        // Same persist-then-commit discipline as insert: a failed write
        // must not make the record vanish from this process while it
        // resurrects on reopen
        let mut candidate = documents.clone();
        let before = candidate.len();
        candidate.retain(|(k, _)| k != key);
        if candidate.len() != before {
            self.persist(&candidate)?;
            *documents = candidate;
        }
        Ok(())
    }
}
