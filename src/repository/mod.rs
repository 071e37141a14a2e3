//! Record repository
//!
//! The stateful half of the core: maps validated blog records to
//! persisted documents and back, assigning identity on create and
//! translating the store's internal key into the public `id` on every
//! read/write boundary. Exposes exactly three operations: list, create,
//! delete-by-id.

mod errors;
mod repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use repository::BlogRepository;
