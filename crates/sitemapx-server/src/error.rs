//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sitemapx::SitemapError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No sitemap registered under the requested section name.
    #[error("No sitemap available for section: {0}")]
    SectionNotFound(String),

    /// The `p` query parameter is not a positive integer.
    #[error("No page '{0}'")]
    BadPage(String),

    /// The requested page is past the last available page.
    #[error("Page {page} empty")]
    PageNotFound {
        /// Requested 1-based page number.
        page: usize,
    },

    /// Sitemap generation failed.
    #[error("Sitemap error: {0}")]
    Sitemap(#[from] SitemapError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::SectionNotFound(section) => (
                StatusCode::NOT_FOUND,
                json!({"error": "No sitemap available", "section": section}),
            ),
            Self::BadPage(raw) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Invalid page", "page": raw}),
            ),
            Self::PageNotFound { page } => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page empty", "page": page}),
            ),
            Self::Sitemap(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
