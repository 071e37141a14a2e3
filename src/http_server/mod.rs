//! # HTTP Server Module
//!
//! Axum-based HTTP layer for the blog API. Decodes inbound requests into
//! candidate records, hands them to the core, and encodes results as
//! JSON responses.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/blogs` - List all blog records
//! - `POST /api/blogs` - Create a blog record (201, or 400 on rejection)
//! - `DELETE /api/blogs/:id` - Delete by public id (204, or 400 on a
//!   malformed id)

pub mod blog_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use blog_routes::BlogState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use server::HttpServer;
