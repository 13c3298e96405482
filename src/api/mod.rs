//! HTTP surface
//!
//! The JSON API is nested under the configured base path (default `/api/v1`); the
//! dashboard page lives at the root. Every route, the fallback included, runs behind the
//! request-context, access-log, and security-header middleware.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod middleware;

use crate::core::config::Config;
use crate::core::service::CourseService;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Path of the dashboard page
pub const VIEW_PATH: &str = "/courses";

/// Server options the handlers and middleware need at request time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind host, also the fallback authority for links
    pub host: String,
    /// Bind port
    pub port: u16,
    /// API mount point, `""` or `/segment...` without trailing slash
    pub base_path: String,
    /// Externally visible origin; empty means "use the Host header"
    pub public_url: String,
}

impl ServerSettings {
    /// Settings from the `[server]` config section
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.port(),
            base_path: config.base_path(),
            public_url: config.server.public_url.clone(),
        }
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Catalog operations
    pub service: Arc<CourseService>,
    /// Server options
    pub settings: Arc<ServerSettings>,
}

impl AppState {
    /// Bundle a service with its server settings
    #[must_use]
    pub fn new(service: CourseService, settings: ServerSettings) -> Self {
        Self {
            service: Arc::new(service),
            settings: Arc::new(settings),
        }
    }
}

/// Build the full application router
///
/// With an empty base path the API owns `/courses`, so the dashboard is only reachable at
/// `/`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/courses", get(handlers::get_courses))
        .route("/courses/:id", get(handlers::get_course))
        .route("/products", get(handlers::get_products))
        .route(
            "/products/:product_id/courses",
            get(handlers::get_courses_by_product),
        );

    let base_path = state.settings.base_path.clone();
    let mut router = Router::new().route("/", get(handlers::courses_view));
    router = if base_path.is_empty() {
        router.merge(api)
    } else {
        router
            .route(VIEW_PATH, get(handlers::courses_view))
            .nest(&base_path, api)
    };

    router
        .fallback(handlers::not_found)
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_context,
        ))
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .with_state(state)
}
