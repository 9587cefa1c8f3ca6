//! HTTP request handlers.

pub(crate) mod sitemap;

/// Extract the section name from a `sitemap-<section>.xml` path segment.
///
/// Returns `None` for anything that does not follow the sitemap file
/// naming scheme, which the handler turns into a 404.
pub(crate) fn parse_section_file(file: &str) -> Option<&str> {
    let section = file.strip_prefix("sitemap-")?.strip_suffix(".xml")?;
    if section.is_empty() { None } else { Some(section) }
}
