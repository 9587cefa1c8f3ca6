//! Error types for sitemap generation.

use crate::page::PageError;

/// Sitemap generation error.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// Change frequency string is not one of the protocol values.
    #[error("Unknown change frequency: {0:?}")]
    InvalidChangeFreq(String),

    /// Requested page does not exist.
    #[error(transparent)]
    Page(#[from] PageError),

    /// I/O error while writing XML (writing to an in-memory buffer,
    /// so only reachable through a custom writer).
    #[error("XML write error: {0}")]
    Xml(#[from] std::io::Error),

    /// XML writer produced invalid UTF-8.
    #[error("Invalid UTF-8 in XML output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
