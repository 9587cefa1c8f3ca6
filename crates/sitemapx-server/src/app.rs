//! Router construction.
//!
//! Builds the axum router with all routes and middleware. The
//! per-section route is registered as a plain path parameter and the
//! `sitemap-<section>.xml` file name is parsed in the handler, so the
//! two static sitemap routes keep precedence over it.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sitemap.xml", get(handlers::sitemap::get_index))
        .route("/sitemap-images.xml", get(handlers::sitemap::get_images))
        .route("/{file}", get(handlers::sitemap::get_section))
        .layer(ServiceBuilder::new().layer(middleware::content_type_options_layer()))
        .with_state(state)
}
