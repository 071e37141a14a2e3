//! Record repository over a document store

use std::sync::Arc;

use crate::blog::{BlogDocument, BlogPost};
use crate::store::{DocumentKey, DocumentStore};

use super::errors::{RepositoryError, RepositoryResult};

/// The persistence-mapping half of the core.
///
/// Holds the storage handle as an explicitly passed dependency (tests
/// substitute an in-memory or failing store) and owns the translation
/// between the store's internal [`DocumentKey`] and the public `id`
/// string. The key type never crosses this interface in either
/// direction: outputs carry rendered ids, and the delete path parses the
/// incoming id back through the store's format gate.
///
/// Stateless apart from the store itself; every operation is one
/// independent round trip.
#[derive(Debug, Clone)]
pub struct BlogRepository {
    store: Arc<dyn DocumentStore>,
}

impl BlogRepository {
    /// Create a repository over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Return all persisted records in storage order, each with its
    /// public id.
    pub fn list(&self) -> RepositoryResult<Vec<BlogPost>> {
        let documents = self.store.find_all()?;
        Ok(documents
            .into_iter()
            .map(|(key, doc)| BlogPost::from_parts(key.to_public_id(), doc))
            .collect())
    }

    /// Persist a normalized record and return it with its assigned id.
    pub fn create(&self, document: BlogDocument) -> RepositoryResult<BlogPost> {
        let key = self.store.insert(document.clone())?;
        Ok(BlogPost::from_parts(key.to_public_id(), document))
    }

    /// Remove the record with the given public id.
    ///
    /// A well-formed id with no matching record succeeds silently; the
    /// only rejection on this path is an id that fails the store's key
    /// format, which is a client error distinct from "absent".
    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let key = DocumentKey::parse(id)
            .map_err(|_| RepositoryError::MalformedIdentifier(id.to_string()))?;
        self.store.delete_by_key(&key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError, StoreResult};

    fn doc(title: &str, likes: u64) -> BlogDocument {
        BlogDocument {
            title: title.to_string(),
            author: None,
            url: format!("https://example.com/{}", title),
            likes,
        }
    }

    fn repository() -> BlogRepository {
        BlogRepository::new(Arc::new(MemoryStore::new()))
    }

    /// Store stub whose every round trip fails, standing in for an
    /// unreachable backend.
    #[derive(Debug)]
    struct UnreachableStore;

    impl DocumentStore for UnreachableStore {
        fn insert(&self, _document: BlogDocument) -> StoreResult<DocumentKey> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        fn find_all(&self) -> StoreResult<Vec<(DocumentKey, BlogDocument)>> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        fn delete_by_key(&self, _key: &DocumentKey) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    #[test]
    fn test_list_empty_store() {
        assert!(repository().list().unwrap().is_empty());
    }

    #[test]
    fn test_create_assigns_public_id() {
        let repo = repository();
        let post = repo.create(doc("a", 3)).unwrap();

        assert!(!post.id.is_empty());
        assert_eq!(post.title, "a");
        assert_eq!(post.likes, 3);
        // The id round-trips through the key format, so it is well-formed
        assert!(DocumentKey::parse(&post.id).is_ok());
    }

    #[test]
    fn test_created_records_get_distinct_ids() {
        let repo = repository();
        let a = repo.create(doc("a", 0)).unwrap();
        let b = repo.create(doc("b", 0)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_length_tracks_creates_and_deletes() {
        let repo = repository();
        let first = repo.create(doc("a", 0)).unwrap();
        repo.create(doc("b", 0)).unwrap();
        repo.create(doc("c", 0)).unwrap();
        assert_eq!(repo.list().unwrap().len(), 3);

        repo.delete_by_id(&first.id).unwrap();
        let remaining = repo.list().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|p| p.id != first.id));
    }

    #[test]
    fn test_delete_well_formed_absent_id_is_silent_success() {
        let repo = repository();
        repo.create(doc("a", 0)).unwrap();

        let absent = DocumentKey::mint().to_public_id();
        repo.delete_by_id(&absent).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_malformed_id_rejected() {
        let repo = repository();
        repo.create(doc("a", 0)).unwrap();

        let result = repo.delete_by_id("bad-id-too-short");
        assert!(matches!(
            result,
            Err(RepositoryError::MalformedIdentifier(_))
        ));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[test]
    fn test_unreachable_store_propagates_as_persistence() {
        let repo = BlogRepository::new(Arc::new(UnreachableStore));

        assert!(matches!(
            repo.create(doc("a", 0)),
            Err(RepositoryError::Persistence(_))
        ));
        assert!(matches!(
            repo.list(),
            Err(RepositoryError::Persistence(_))
        ));

        let id = DocumentKey::mint().to_public_id();
        assert!(matches!(
            repo.delete_by_id(&id),
            Err(RepositoryError::Persistence(_))
        ));
    }

    #[test]
    fn test_malformed_id_checked_before_store_round_trip() {
        // Even against an unreachable store, a malformed id is a client
        // error, not a persistence failure
        let repo = BlogRepository::new(Arc::new(UnreachableStore));
        assert!(matches!(
            repo.delete_by_id("nope"),
            Err(RepositoryError::MalformedIdentifier(_))
        ));
    }
}
