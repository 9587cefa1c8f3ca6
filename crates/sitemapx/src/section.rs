//! Sitemap section contract.

use crate::entry::UrlEntry;
use crate::error::SitemapError;

/// One named section of a site's sitemap.
///
/// Implementations produce the entries for a given 1-based page.
/// The registry in the server crate stores sections as trait objects,
/// read-only after startup.
pub trait SitemapSection: Send + Sync {
    /// Entries on the given 1-based page.
    ///
    /// # Errors
    ///
    /// Returns [`SitemapError::Page`] when the page is out of range
    /// (flavors may instead degrade to an empty list, see
    /// [`StaticSitemap`](crate::StaticSitemap)).
    fn get_urls(&self, page: usize) -> Result<Vec<UrlEntry>, SitemapError>;

    /// Number of pages this section spans, always at least 1.
    fn num_pages(&self) -> usize {
        1
    }
}
