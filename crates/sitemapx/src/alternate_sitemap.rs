//! Alternate-hreflang sitemap.
//!
//! Lists pages together with their language/region variants as
//! `<xhtml:link rel="alternate" hreflang="x">` elements, per
//! Google's multilingual sitemap guidelines. The provider supplies
//! both the items and their (hreflang, URL) pairs; requiring the
//! pairs through [`AlternateProvider`] makes "forgot to implement
//! alternates" a type error rather than a runtime failure.

use crate::entry::{AlternateHreflangEntry, AlternateLink, SitemapEntry, UrlEntry};
use crate::error::SitemapError;
use crate::page::{DEFAULT_PER_PAGE, Paginator, num_pages_for};
use crate::resolve::EntryFields;
use crate::section::SitemapSection;
use crate::site::{CanonicalUrl, Site};

/// Items plus their language variants.
pub trait AlternateProvider: Send + Sync {
    /// Backing item type.
    type Item: CanonicalUrl + Send + Sync;

    /// Snapshot of the current items.
    fn items(&self) -> Vec<Self::Item>;

    /// (hreflang, URL) pairs for one item, in output order.
    ///
    /// ```
    /// # struct Article { english_url: String }
    /// # fn alternate_hreflangs(article: &Article) -> Vec<(String, String)> {
    /// vec![("en-us".to_owned(), article.english_url.clone())]
    /// # }
    /// ```
    fn alternate_hreflangs(&self, item: &Self::Item) -> Vec<(String, String)>;
}

/// Record-backed sitemap carrying alternate-hreflang links.
///
/// Locations are always prefixed with the site's scheme and domain;
/// unlike the image flavor there is no opt-out, since hreflang
/// annotations are only meaningful on absolute URLs.
pub struct AlternateHreflangSitemap<P: AlternateProvider> {
    provider: P,
    fields: EntryFields<P::Item>,
    site: Site,
    per_page: usize,
}

impl<P: AlternateProvider> AlternateHreflangSitemap<P> {
    #[must_use]
    pub fn new(provider: P, fields: EntryFields<P::Item>, site: Site) -> Self {
        Self {
            provider,
            fields,
            site,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    fn entry_for(&self, item: &P::Item) -> AlternateHreflangEntry {
        let location = self
            .fields
            .location
            .resolve(item)
            .unwrap_or_else(|| item.canonical_url());
        AlternateHreflangEntry {
            entry: SitemapEntry {
                location: self.site.prefix(&location),
                lastmod: self.fields.lastmod.resolve(item),
                changefreq: self.fields.changefreq.resolve(item),
                priority: self.fields.priority.resolve(item),
            },
            alternates: self
                .provider
                .alternate_hreflangs(item)
                .into_iter()
                .map(|(hreflang, href)| AlternateLink::new(hreflang, href))
                .collect(),
        }
    }
}

impl<P: AlternateProvider> SitemapSection for AlternateHreflangSitemap<P> {
    fn get_urls(&self, page: usize) -> Result<Vec<UrlEntry>, SitemapError> {
        let items = self.provider.items();
        let paginator = Paginator::with_per_page(&items, self.per_page);
        let urls = paginator
            .page(page)?
            .iter()
            .map(|item| UrlEntry::from(self.entry_for(item)))
            .collect();
        Ok(urls)
    }

    fn num_pages(&self) -> usize {
        num_pages_for(self.provider.items().len(), self.per_page)
    }
}
