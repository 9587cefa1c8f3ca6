//! HTTP server glue for serving sitemaps.
//!
//! This crate wires sitemap sections built with the `sitemapx` core
//! crate into an axum application:
//!
//! - `GET /sitemap.xml` — combined sitemap index, one entry per page
//!   of every registered section
//! - `GET /sitemap-{section}.xml?p=N` — one section's `<urlset>`
//! - `GET /sitemap-images.xml?p=N` — every image section, combined
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use sitemapx::{EntryOverrides, StaticSitemap};
//! use sitemapx_config::SitemapConfig;
//! use sitemapx_server::{SitemapRegistry, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = SitemapConfig::from_toml("[site]\ndomain = \"example.com\"").unwrap();
//!
//!     let mut service = StaticSitemap::default();
//!     service.add_url("/contact/", EntryOverrides::default());
//!
//!     let registry = SitemapRegistry::new().with_section("service", Arc::new(service));
//!
//!     run_server(&config, registry, SitemapRegistry::new()).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod registry;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use sitemapx_config::SitemapConfig;
use state::AppState;

pub use error::ServerError;
pub use registry::SitemapRegistry;

/// Build the application router for the given configuration and
/// registries, for embedding into a larger axum application.
#[must_use]
pub fn create_app(
    config: &SitemapConfig,
    registry: SitemapRegistry,
    images: SitemapRegistry,
) -> axum::Router {
    let state = Arc::new(AppState {
        registry,
        images,
        site: config.site.site(),
        debug: config.debug,
    });
    app::create_router(state)
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(
    config: &SitemapConfig,
    registry: SitemapRegistry,
    images: SitemapRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_app(config, registry, images);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.server.host, config.server.port))?;
    tracing::info!(address = %addr, "Starting sitemap server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
