//! Sitemap section registry.
//!
//! Maps section names to sitemap instances. Built once during
//! application startup and read-only afterwards; the handlers only
//! ever look sections up.

use std::sync::Arc;

use sitemapx::SitemapSection;

/// Ordered registry of named sitemap sections.
#[derive(Default)]
pub struct SitemapRegistry {
    sections: Vec<(String, Arc<dyn SitemapSection>)>,
}

impl SitemapRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section under a name, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, section: Arc<dyn SitemapSection>) {
        let name = name.into();
        if let Some(existing) = self.sections.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = section;
        } else {
            self.sections.push((name, section));
        }
    }

    /// Register a section built by a factory.
    pub fn register_with<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: FnOnce() -> Arc<dyn SitemapSection>,
    {
        self.register(name, factory());
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, section: Arc<dyn SitemapSection>) -> Self {
        self.register(name, section);
        self
    }

    /// Look a section up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SitemapSection>> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Sections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn SitemapSection>)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sitemapx::{EntryOverrides, StaticSitemap};

    use super::*;

    fn section(url: &str) -> Arc<dyn SitemapSection> {
        let mut sitemap = StaticSitemap::default();
        sitemap.add_url(url, EntryOverrides::default());
        Arc::new(sitemap)
    }

    #[test]
    fn test_lookup_by_name() {
        let mut registry = SitemapRegistry::new();
        registry.register("blog", section("/blog/"));

        assert!(registry.get("blog").is_some());
        assert!(registry.get("shop").is_none());
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = SitemapRegistry::new()
            .with_section("b", section("/b/"))
            .with_section("a", section("/a/"));

        let names: Vec<_> = registry.iter().map(|(n, _)| n).collect();

        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_reregistration_replaces_in_place() {
        let mut registry = SitemapRegistry::new()
            .with_section("a", section("/old/"))
            .with_section("b", section("/b/"));
        registry.register_with("a", || section("/new/"));

        assert_eq!(registry.len(), 2);
        let urls = registry.get("a").unwrap().get_urls(1).unwrap();
        assert_eq!(urls[0].location, "/new/");
    }
}
