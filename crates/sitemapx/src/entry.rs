//! Sitemap entry records.
//!
//! One [`SitemapEntry`] describes a single URL's worth of metadata.
//! The image and alternate-hreflang variants wrap it with their extra
//! fields; [`UrlEntry`] is the unified record the XML writer and the
//! HTTP handlers consume.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::changefreq::ChangeFreq;

/// One URL with its optional crawl metadata.
///
/// Entries are ephemeral: they are produced per `get_urls` call and
/// owned by the rendering pass that requested them.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    /// Location URL.
    pub location: String,
    /// Last modification time.
    pub lastmod: Option<DateTime<Utc>>,
    /// Change frequency hint.
    pub changefreq: Option<ChangeFreq>,
    /// Priority relative to other URLs on the site. Conventionally
    /// 0.0–1.0; not validated here (the consumer owns the convention).
    pub priority: Option<f32>,
}

impl SitemapEntry {
    /// Create an entry with a location and no metadata.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// Image extension fields for one URL.
#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    /// Image location URL.
    pub location: String,
    /// Image caption.
    pub caption: Option<String>,
    /// Image title.
    pub title: Option<String>,
    /// License URL.
    pub license: Option<String>,
    /// Geographic location string (e.g. "Limerick, Ireland").
    pub geo_location: Option<String>,
}

/// One `rel="alternate" hreflang="x"` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    /// Language/region code (e.g. "en-us").
    pub hreflang: String,
    /// URL of the language variant.
    pub href: String,
}

impl AlternateLink {
    pub fn new(hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            hreflang: hreflang.into(),
            href: href.into(),
        }
    }
}

/// A [`SitemapEntry`] plus its resolved image fields.
#[derive(Debug, Clone, Serialize)]
pub struct ImageSitemapEntry {
    /// Base URL metadata.
    pub entry: SitemapEntry,
    /// Image fields, absent when no image location was resolved.
    pub image: Option<ImageEntry>,
}

/// A [`SitemapEntry`] plus its language variants, in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct AlternateHreflangEntry {
    /// Base URL metadata.
    pub entry: SitemapEntry,
    /// Alternate links, rendered in this order.
    pub alternates: Vec<AlternateLink>,
}

/// Unified output record consumed by the XML writer.
#[derive(Debug, Clone, Serialize)]
pub struct UrlEntry {
    /// Location URL.
    pub location: String,
    /// Last modification time.
    pub lastmod: Option<DateTime<Utc>>,
    /// Change frequency hint.
    pub changefreq: Option<ChangeFreq>,
    /// Priority (unvalidated, see [`SitemapEntry::priority`]).
    pub priority: Option<f32>,
    /// Image extension fields.
    pub image: Option<ImageEntry>,
    /// Alternate-hreflang links.
    pub alternates: Vec<AlternateLink>,
}

impl From<SitemapEntry> for UrlEntry {
    fn from(entry: SitemapEntry) -> Self {
        Self {
            location: entry.location,
            lastmod: entry.lastmod,
            changefreq: entry.changefreq,
            priority: entry.priority,
            image: None,
            alternates: Vec::new(),
        }
    }
}

impl From<ImageSitemapEntry> for UrlEntry {
    fn from(entry: ImageSitemapEntry) -> Self {
        let mut url: Self = entry.entry.into();
        url.image = entry.image;
        url
    }
}

impl From<AlternateHreflangEntry> for UrlEntry {
    fn from(entry: AlternateHreflangEntry) -> Self {
        let mut url: Self = entry.entry.into();
        url.alternates = entry.alternates;
        url
    }
}
