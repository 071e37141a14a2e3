//! bloglist - a minimal blog-post CRUD service over a document store
//!
//! The core is two small components: validation & normalization of
//! candidate blog records, and a record repository mapping them to
//! persisted documents. Everything else is plumbing: an axum HTTP layer,
//! a pluggable document store, and a clap CLI.

pub mod blog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod repository;
pub mod store;
pub mod validation;
