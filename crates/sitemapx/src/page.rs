//! Pagination over sitemap items.
//!
//! The sitemaps.org protocol caps one document at 50 000 URLs; larger
//! sections are split into pages addressed 1-based via the `p` query
//! parameter.

/// Maximum URLs per sitemap document per the protocol.
pub const DEFAULT_PER_PAGE: usize = 50_000;

/// Page lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// Requested page is zero or past the last page.
    #[error("Page {page} out of range ({num_pages} pages available)")]
    OutOfRange {
        /// Requested 1-based page number.
        page: usize,
        /// Number of pages actually available.
        num_pages: usize,
    },
}

/// Fixed-size pagination over a slice of items.
///
/// An empty item list still has one (empty) page, so empty sitemaps
/// render as an empty `<urlset>` rather than a missing page.
#[derive(Debug)]
pub struct Paginator<'a, I> {
    items: &'a [I],
    per_page: usize,
}

impl<'a, I> Paginator<'a, I> {
    /// Paginate with the protocol's 50 000 URL limit.
    #[must_use]
    pub fn new(items: &'a [I]) -> Self {
        Self::with_per_page(items, DEFAULT_PER_PAGE)
    }

    /// Paginate with a custom page size. A zero `per_page` is clamped to 1.
    #[must_use]
    pub fn with_per_page(items: &'a [I], per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
        }
    }

    /// Number of pages, always at least 1.
    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    /// Items on the given 1-based page.
    pub fn page(&self, page: usize) -> Result<&'a [I], PageError> {
        let num_pages = self.num_pages();
        if page == 0 || page > num_pages {
            return Err(PageError::OutOfRange { page, num_pages });
        }
        let start = (page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.items.len());
        Ok(&self.items[start..end])
    }
}

/// Number of pages a slice of items spans with the given page size.
#[must_use]
pub(crate) fn num_pages_for(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}
