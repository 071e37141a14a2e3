//! # HTTP Server
//!
//! Main HTTP server combining the blog and health routers over a shared
//! repository.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::repository::BlogRepository;

use super::blog_routes::{blog_routes, BlogState};
use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// HTTP server for the blog API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given repository with default
    /// configuration
    pub fn new(repository: BlogRepository) -> Self {
        Self::with_config(repository, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(repository: BlogRepository, config: HttpServerConfig) -> Self {
        let router = Self::build_router(repository);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(repository: BlogRepository) -> Router {
        let blog_state = Arc::new(BlogState::new(repository));

        // Permissive CORS: this service carries no credentials or auth
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .nest("/api", blog_routes(blog_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind a listener on the configured address.
    ///
    /// Goes through `ToSocketAddrs`, so a hostname like `localhost`
    /// resolves the same as an IP literal.
    async fn bind(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.config.socket_addr()).await
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = self.bind().await?;
        let addr_str = listener.local_addr()?.to_string();
        Logger::info("server_listening", &[("addr", addr_str.as_str())]);
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
