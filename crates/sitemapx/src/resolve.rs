//! Per-item field resolution.
//!
//! Sitemap fields like `location` or `priority` can be a fixed value
//! shared by every item or computed per item. [`FieldSource`] makes
//! that choice an explicit variant instead of reflection: `Unset`
//! means "field not configured" and resolves to `None`, never an
//! error.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::changefreq::ChangeFreq;

/// Source of one sitemap field for items of type `I`.
pub enum FieldSource<I, T> {
    /// Field not configured; resolves to `None`.
    Unset,
    /// Same value for every item.
    Constant(T),
    /// Computed from the item; `None` means unresolvable for that item.
    PerItem(Box<dyn Fn(&I) -> Option<T> + Send + Sync>),
}

impl<I, T: Clone> FieldSource<I, T> {
    /// Fixed value shared by all items.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    /// Per-item resolver function.
    #[must_use]
    pub fn per_item(f: impl Fn(&I) -> Option<T> + Send + Sync + 'static) -> Self {
        Self::PerItem(Box::new(f))
    }

    /// Resolve the field for one item.
    #[must_use]
    pub fn resolve(&self, item: &I) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Constant(value) => Some(value.clone()),
            Self::PerItem(f) => f(item),
        }
    }

    /// Whether a source is configured at all.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl<I, T> Default for FieldSource<I, T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<I, T: fmt::Debug> fmt::Debug for FieldSource<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::PerItem(_) => f.write_str("PerItem(..)"),
        }
    }
}

/// Field sources for the base URL metadata, shared by the record-backed
/// sitemap flavors.
#[derive(Debug)]
pub struct EntryFields<I> {
    /// Page location (path or absolute URL). When unset, the item's
    /// canonical URL is used instead.
    pub location: FieldSource<I, String>,
    /// Last modification time.
    pub lastmod: FieldSource<I, DateTime<Utc>>,
    /// Change frequency hint.
    pub changefreq: FieldSource<I, ChangeFreq>,
    /// Priority.
    pub priority: FieldSource<I, f32>,
}

// Manual impl: a derived `Default` would demand `I: Default`, which
// item types have no reason to implement.
impl<I> Default for EntryFields<I> {
    fn default() -> Self {
        Self {
            location: FieldSource::Unset,
            lastmod: FieldSource::Unset,
            changefreq: FieldSource::Unset,
            priority: FieldSource::Unset,
        }
    }
}
