//! Site identity for absolute URL construction.

use serde::{Deserialize, Serialize};

/// The site whose sitemap is being generated.
///
/// Used to turn site-relative paths into absolute URLs when the
/// prepend flags are enabled (and unconditionally for the
/// alternate-hreflang flavor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// URL scheme, without the `://` separator.
    pub scheme: String,
    /// Host name, e.g. "example.com".
    pub domain: String,
}

impl Site {
    /// Site reachable over plain HTTP.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            scheme: "http".to_owned(),
            domain: domain.into(),
        }
    }

    /// Site with an explicit scheme.
    #[must_use]
    pub fn with_scheme(scheme: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            domain: domain.into(),
        }
    }

    /// Prefix a site-relative path with the site's scheme and domain.
    #[must_use]
    pub fn prefix(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.domain, path)
    }
}

/// Canonical absolute URL of a record-backed page.
///
/// Fallback location used by the record-backed sitemap flavors when no
/// location field source is configured.
pub trait CanonicalUrl {
    /// Site-relative canonical URL of this item, e.g. `/foo/1/`.
    fn canonical_url(&self) -> String;
}
