//! Application state.
//!
//! Shared state for all request handlers.

use sitemapx::Site;

use crate::registry::SitemapRegistry;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Regular sitemap sections, served per section and listed by the index.
    pub(crate) registry: SitemapRegistry,
    /// Image sitemap sections, served combined on the images route.
    pub(crate) images: SitemapRegistry,
    /// Site identity for index URLs.
    pub(crate) site: Site,
    /// Enable verbose output (log every skipped item).
    pub(crate) debug: bool,
}
