//! Observability for the blog service
//!
//! Structured one-line JSON logging with explicit severity levels and
//! deterministic field ordering. INFO/WARN events go to stdout, ERROR/FATAL
//! to stderr, so operational tooling can split the streams.

mod logger;

pub use logger::{Logger, Severity};
