//! Static sitemap for service pages.
//!
//! Populated by hand from named routes or literal URLs rather than a
//! record store. Each registration can carry its own lastmod,
//! changefreq, and priority; anything left unset falls back to the
//! sitemap-level defaults.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::changefreq::ChangeFreq;
use crate::entry::{SitemapEntry, UrlEntry};
use crate::error::SitemapError;
use crate::page::{DEFAULT_PER_PAGE, Paginator, num_pages_for};
use crate::routes::{RouteMap, RouteParams};
use crate::section::SitemapSection;

/// Per-registration metadata overrides.
///
/// Unset fields fall back to the sitemap's defaults.
#[derive(Debug, Clone, Default)]
pub struct EntryOverrides {
    /// Override last modification time.
    pub lastmod: Option<DateTime<Utc>>,
    /// Override change frequency.
    pub changefreq: Option<ChangeFreq>,
    /// Override priority.
    pub priority: Option<f32>,
}

/// Sitemap of manually registered pages.
///
/// ```
/// use std::sync::Arc;
/// use sitemapx::{ChangeFreq, EntryOverrides, RouteMap, RouteParams, StaticSitemap};
///
/// let routes = Arc::new(
///     RouteMap::new()
///         .with_route("blog.welcome", "/")
///         .with_route("feedback.contact", "/contact/"),
/// );
/// let mut service = StaticSitemap::new(Arc::clone(&routes))
///     .with_priority(0.1)
///     .with_changefreq(ChangeFreq::Never);
/// service.add_named_pattern("blog.welcome", &RouteParams::new(), EntryOverrides::default());
/// service.add_named_pattern("feedback.contact", &RouteParams::new(), EntryOverrides::default());
/// assert_eq!(service.len(), 2);
/// ```
#[derive(Debug)]
pub struct StaticSitemap {
    routes: Arc<RouteMap>,
    priority: f32,
    changefreq: ChangeFreq,
    lastmod: DateTime<Utc>,
    entries: Vec<SitemapEntry>,
    per_page: usize,
}

impl Default for StaticSitemap {
    /// Sitemap with an empty route map, for literal-URL-only use.
    fn default() -> Self {
        Self::new(Arc::new(RouteMap::new()))
    }
}

impl StaticSitemap {
    /// Create a sitemap resolving named patterns against `routes`.
    ///
    /// Defaults: priority 1.0, changefreq `never`, lastmod = now.
    #[must_use]
    pub fn new(routes: Arc<RouteMap>) -> Self {
        Self {
            routes,
            priority: 1.0,
            changefreq: ChangeFreq::Never,
            lastmod: Utc::now(),
            entries: Vec::new(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the default priority.
    #[must_use]
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the default change frequency.
    #[must_use]
    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = changefreq;
        self
    }

    /// Set the default last modification time.
    #[must_use]
    pub fn with_lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
        self.lastmod = lastmod;
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Register a page by route name.
    ///
    /// A registration that fails to resolve is dropped, not an error:
    /// the sitemap simply never lists that page.
    pub fn add_named_pattern(&mut self, name: &str, params: &RouteParams, overrides: EntryOverrides) {
        match self.routes.resolve(name, params) {
            Ok(location) => self.push(location, overrides),
            Err(err) => {
                tracing::debug!(route = %name, error = %err, "Dropping unresolvable sitemap registration");
            }
        }
    }

    /// Register a literal URL.
    pub fn add_url(&mut self, url: impl Into<String>, overrides: EntryOverrides) {
        self.push(url.into(), overrides);
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, location: String, overrides: EntryOverrides) {
        self.entries.push(SitemapEntry {
            location,
            lastmod: Some(overrides.lastmod.unwrap_or(self.lastmod)),
            changefreq: Some(overrides.changefreq.unwrap_or(self.changefreq)),
            priority: Some(overrides.priority.unwrap_or(self.priority)),
        });
    }
}

impl SitemapSection for StaticSitemap {
    /// Entries on the given page. An out-of-range page degrades to an
    /// empty list so a broken registration can never take the whole
    /// sitemap down.
    fn get_urls(&self, page: usize) -> Result<Vec<UrlEntry>, SitemapError> {
        let paginator = Paginator::with_per_page(&self.entries, self.per_page);
        match paginator.page(page) {
            Ok(items) => Ok(items.iter().cloned().map(UrlEntry::from).collect()),
            Err(err) => {
                tracing::debug!(page, error = %err, "Static sitemap page lookup failed");
                Ok(Vec::new())
            }
        }
    }

    fn num_pages(&self) -> usize {
        num_pages_for(self.entries.len(), self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn routes() -> Arc<RouteMap> {
        Arc::new(
            RouteMap::new()
                .with_route("blog.welcome", "/")
                .with_route("blog.browse", "/browse/{content_type}/"),
        )
    }

    #[test]
    fn test_resolvable_pattern_appears_exactly_once_with_defaults() {
        let lastmod = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let mut sitemap = StaticSitemap::new(routes())
            .with_priority(0.1)
            .with_changefreq(ChangeFreq::Never)
            .with_lastmod(lastmod);
        sitemap.add_named_pattern("blog.welcome", &RouteParams::new(), EntryOverrides::default());

        let urls = sitemap.get_urls(1).unwrap();

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].location, "/");
        assert_eq!(urls[0].lastmod, Some(lastmod));
        assert_eq!(urls[0].changefreq, Some(ChangeFreq::Never));
        assert_eq!(urls[0].priority, Some(0.1));
    }

    #[test]
    fn test_overrides_beat_sitemap_defaults() {
        let mut sitemap = StaticSitemap::new(routes()).with_priority(0.1);
        sitemap.add_named_pattern(
            "blog.browse",
            &RouteParams::new().kwarg("content_type", "articles"),
            EntryOverrides {
                priority: Some(0.9),
                changefreq: Some(ChangeFreq::Daily),
                lastmod: None,
            },
        );

        let urls = sitemap.get_urls(1).unwrap();

        assert_eq!(urls[0].location, "/browse/articles/");
        assert_eq!(urls[0].priority, Some(0.9));
        assert_eq!(urls[0].changefreq, Some(ChangeFreq::Daily));
    }

    #[test]
    fn test_unresolvable_pattern_is_silently_dropped() {
        let mut sitemap = StaticSitemap::new(routes());
        sitemap.add_named_pattern("no.such.route", &RouteParams::new(), EntryOverrides::default());
        sitemap.add_named_pattern("blog.browse", &RouteParams::new(), EntryOverrides::default());
        sitemap.add_named_pattern("blog.welcome", &RouteParams::new(), EntryOverrides::default());

        let urls = sitemap.get_urls(1).unwrap();

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].location, "/");
    }

    #[test]
    fn test_add_url_appends_literal_url() {
        let mut sitemap = StaticSitemap::default();
        sitemap.add_url("http://example.com/terms/", EntryOverrides::default());

        let urls = sitemap.get_urls(1).unwrap();

        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].location, "http://example.com/terms/");
        assert_eq!(urls[0].priority, Some(1.0));
        assert_eq!(urls[0].changefreq, Some(ChangeFreq::Never));
    }

    #[test]
    fn test_out_of_range_page_degrades_to_empty_list() {
        let mut sitemap = StaticSitemap::default();
        sitemap.add_url("/only/", EntryOverrides::default());

        let urls = sitemap.get_urls(99).unwrap();

        assert!(urls.is_empty());
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let mut sitemap = StaticSitemap::default();
        sitemap.add_url("/a/", EntryOverrides::default());
        sitemap.add_url("/b/", EntryOverrides::default());

        let urls = sitemap.get_urls(1).unwrap();
        let locations: Vec<_> = urls.iter().map(|u| u.location.as_str()).collect();

        assert_eq!(locations, vec!["/a/", "/b/"]);
    }
}
