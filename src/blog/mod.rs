//! Blog record shapes
//!
//! A blog record moves through three shapes on its way in and out of the
//! system:
//!
//! - `BlogDraft`: the candidate record as decoded from a request body,
//!   every field optional
//! - `BlogDocument`: the validated, normalized record as persisted by the
//!   store, carrying no identifier
//! - `BlogPost`: the public record as returned to callers, carrying the
//!   public `id` and never the store's internal key
//!
//! Identity is assigned by the store at creation time; the repository owns
//! the rendering of internal keys into the public `id` field.

mod document;
mod draft;
mod post;

pub use document::BlogDocument;
pub use draft::BlogDraft;
pub use post::BlogPost;
