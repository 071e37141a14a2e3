//! Validation & normalization for candidate blog records
//!
//! The stateless half of the core: enforces the required-field rules
//! (`title` and `url` must be present and non-empty) and fills in the
//! `likes` default before anything reaches the store. Performs no I/O.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{validate, validate_body};
