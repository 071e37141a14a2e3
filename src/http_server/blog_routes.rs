//! Blog HTTP Routes
//!
//! Endpoints for listing, creating, and deleting blog records.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::Value;

use crate::blog::BlogPost;
use crate::repository::BlogRepository;
use crate::validation::validate_body;

use super::errors::ApiError;

/// Blog state shared across handlers
#[derive(Debug, Clone)]
pub struct BlogState {
    pub repository: BlogRepository,
}

impl BlogState {
    pub fn new(repository: BlogRepository) -> Self {
        Self { repository }
    }
}

/// Create blog routes
pub fn blog_routes(state: Arc<BlogState>) -> Router {
    Router::new()
        .route("/blogs", get(list_blogs_handler))
        .route("/blogs", post(create_blog_handler))
        .route("/blogs/:id", delete(delete_blog_handler))
        .with_state(state)
}

/// GET /blogs - all records, storage order, public ids only
async fn list_blogs_handler(
    State(state): State<Arc<BlogState>>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.repository.list()?;
    Ok(Json(posts))
}

/// POST /blogs - validate, normalize, persist; 201 with the stored record
async fn create_blog_handler(
    State(state): State<Arc<BlogState>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    // The body is taken as raw JSON so that a non-blog-shaped payload is
    // reported as a validation rejection (400), not a framework decode
    // failure
    let document = validate_body(body)?;
    let post = state.repository.create(document)?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// DELETE /blogs/:id - 204 whether or not the record existed
async fn delete_blog_handler(
    State(state): State<Arc<BlogState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repository.delete_by_id(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
