//! XML sitemap generation.
//!
//! This crate builds sitemap documents per the sitemaps.org protocol:
//! plain URL sitemaps, image sitemaps (Google image extension), and
//! sitemaps carrying `rel="alternate" hreflang="x"` links for
//! language variants of the same content.
//!
//! Three sitemap flavors implement the [`SitemapSection`] trait:
//!
//! - [`StaticSitemap`] — hand-registered named routes or literal URLs,
//!   for service pages that are not backed by a record store.
//! - [`ImageSitemap`] — record-backed pages with per-item image
//!   location/caption/title/license/geo fields resolved through
//!   configurable [`FieldSource`]s.
//! - [`AlternateHreflangSitemap`] — record-backed pages where the
//!   provider supplies (hreflang, URL) pairs per item.
//!
//! Rendering to XML is handled by the [`xml`] module.
//!
//! # Quick Start
//!
//! ```
//! use sitemapx::{ChangeFreq, EntryOverrides, SitemapSection, StaticSitemap};
//!
//! let mut sitemap = StaticSitemap::default().with_changefreq(ChangeFreq::Daily);
//! sitemap.add_url("http://example.com/about/", EntryOverrides::default());
//!
//! let urls = sitemap.get_urls(1).unwrap();
//! let xml = sitemapx::xml::write_urlset(&urls).unwrap();
//! assert!(xml.contains("<loc>http://example.com/about/</loc>"));
//! ```

mod alternate_sitemap;
mod changefreq;
mod entry;
mod error;
mod image_sitemap;
mod page;
mod resolve;
mod routes;
mod section;
mod site;
mod static_sitemap;
pub mod xml;

pub use alternate_sitemap::{AlternateHreflangSitemap, AlternateProvider};
pub use changefreq::ChangeFreq;
pub use entry::{
    AlternateHreflangEntry, AlternateLink, ImageEntry, ImageSitemapEntry, SitemapEntry, UrlEntry,
};
pub use error::SitemapError;
pub use image_sitemap::{ImageFields, ImageSitemap, ItemSource, QueryFn};
pub use page::{DEFAULT_PER_PAGE, PageError, Paginator};
pub use resolve::{EntryFields, FieldSource};
pub use routes::{RouteError, RouteMap, RouteParams};
pub use section::SitemapSection;
pub use site::{CanonicalUrl, Site};
pub use static_sitemap::{EntryOverrides, StaticSitemap};
