//! Image sitemap.
//!
//! Wraps a record-backed item source and adds Google image extension
//! fields per item, each resolved through a configurable
//! [`FieldSource`]. Page and image locations can be prefixed with the
//! site's scheme and domain, controlled independently by the two
//! prepend flags.

use crate::entry::{ImageEntry, ImageSitemapEntry, SitemapEntry, UrlEntry};
use crate::error::SitemapError;
use crate::page::{DEFAULT_PER_PAGE, Paginator, num_pages_for};
use crate::resolve::{EntryFields, FieldSource};
use crate::section::SitemapSection;
use crate::site::{CanonicalUrl, Site};

/// Source of the items behind a record-backed sitemap.
///
/// Stands in for a store query: implementations return a fresh
/// snapshot per call, scoped to one `get_urls` pass.
pub trait ItemSource<I>: Send + Sync {
    /// Snapshot of the current items.
    fn items(&self) -> Vec<I>;
}

impl<I: Clone + Send + Sync> ItemSource<I> for Vec<I> {
    fn items(&self) -> Vec<I> {
        self.clone()
    }
}

/// Adapter turning a query closure into an [`ItemSource`].
pub struct QueryFn<F>(pub F);

impl<I, F> ItemSource<I> for QueryFn<F>
where
    F: Fn() -> Vec<I> + Send + Sync,
{
    fn items(&self) -> Vec<I> {
        (self.0)()
    }
}

/// Field sources for the image extension elements.
#[derive(Debug)]
pub struct ImageFields<I> {
    /// Base URL metadata sources.
    pub entry: EntryFields<I>,
    /// Image location. When unset, entries carry no image block at all.
    pub location: FieldSource<I, String>,
    /// Image caption.
    pub caption: FieldSource<I, String>,
    /// Image title.
    pub title: FieldSource<I, String>,
    /// License URL.
    pub license: FieldSource<I, String>,
    /// Geographic location.
    pub geo_location: FieldSource<I, String>,
}

// Manual impl, same reason as `EntryFields`: no `I: Default` bound.
impl<I> Default for ImageFields<I> {
    fn default() -> Self {
        Self {
            entry: EntryFields::default(),
            location: FieldSource::Unset,
            caption: FieldSource::Unset,
            title: FieldSource::Unset,
            license: FieldSource::Unset,
            geo_location: FieldSource::Unset,
        }
    }
}

/// Record-backed sitemap with image extension fields.
pub struct ImageSitemap<I, S> {
    source: S,
    fields: ImageFields<I>,
    site: Site,
    prepend_loc: bool,
    prepend_image_loc: bool,
    per_page: usize,
}

impl<I, S> ImageSitemap<I, S>
where
    I: CanonicalUrl + Send + Sync,
    S: ItemSource<I>,
{
    /// Create an image sitemap over `source` for `site`.
    ///
    /// Both prepend flags default to enabled.
    #[must_use]
    pub fn new(source: S, fields: ImageFields<I>, site: Site) -> Self {
        Self {
            source,
            fields,
            site,
            prepend_loc: true,
            prepend_image_loc: true,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Control page-location domain prefixing.
    #[must_use]
    pub fn prepend_loc(mut self, enabled: bool) -> Self {
        self.prepend_loc = enabled;
        self
    }

    /// Control image-location domain prefixing.
    #[must_use]
    pub fn prepend_image_loc(mut self, enabled: bool) -> Self {
        self.prepend_image_loc = enabled;
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Build the entry for one item, or `None` when the item must be
    /// skipped because its configured image location cannot be
    /// prefixed.
    fn entry_for(&self, item: &I) -> Option<ImageSitemapEntry> {
        let mut location = self
            .fields
            .entry
            .location
            .resolve(item)
            .unwrap_or_else(|| item.canonical_url());
        if self.prepend_loc {
            location = self.site.prefix(&location);
        }

        let image = match self.fields.location.resolve(item) {
            Some(image_location) => {
                let image_location = if self.prepend_image_loc {
                    self.site.prefix(&image_location)
                } else {
                    image_location
                };
                Some(ImageEntry {
                    location: image_location,
                    caption: self.fields.caption.resolve(item),
                    title: self.fields.title.resolve(item),
                    license: self.fields.license.resolve(item),
                    geo_location: self.fields.geo_location.resolve(item),
                })
            }
            // A configured image location that fails to resolve while
            // prefixing is on drops the whole item, matching the
            // historical behavior of this sitemap flavor.
            None if self.fields.location.is_configured() && self.prepend_image_loc => {
                tracing::debug!(
                    location = %location,
                    "Skipping sitemap item with unresolvable image location"
                );
                return None;
            }
            None => None,
        };

        Some(ImageSitemapEntry {
            entry: SitemapEntry {
                location,
                lastmod: self.fields.entry.lastmod.resolve(item),
                changefreq: self.fields.entry.changefreq.resolve(item),
                priority: self.fields.entry.priority.resolve(item),
            },
            image,
        })
    }
}

impl<I, S> SitemapSection for ImageSitemap<I, S>
where
    I: CanonicalUrl + Send + Sync,
    S: ItemSource<I>,
{
    fn get_urls(&self, page: usize) -> Result<Vec<UrlEntry>, SitemapError> {
        let items = self.source.items();
        let paginator = Paginator::with_per_page(&items, self.per_page);
        let urls = paginator
            .page(page)?
            .iter()
            .filter_map(|item| self.entry_for(item))
            .map(UrlEntry::from)
            .collect();
        Ok(urls)
    }

    fn num_pages(&self) -> usize {
        num_pages_for(self.source.items().len(), self.per_page)
    }
}
