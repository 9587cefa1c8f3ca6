//! XML serialization of sitemap documents.
//!
//! Emits `<urlset>` documents per the sitemaps.org protocol, with the
//! Google image extension and `xhtml:link` alternate elements where
//! entries carry them, and `<sitemapindex>` documents for the
//! combined index. Escaping is handled by the quick-xml writer.

use chrono::SecondsFormat;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::{AlternateLink, ImageEntry, UrlEntry};
use crate::error::SitemapError;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
/// Google image extension namespace.
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
/// XHTML namespace for alternate links.
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Render a `<urlset>` document for the given entries.
///
/// The image and xhtml namespace declarations are only emitted when
/// some entry actually uses them.
pub fn write_urlset(entries: &[UrlEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    if entries.iter().any(|e| e.image.is_some()) {
        urlset.push_attribute(("xmlns:image", IMAGE_NS));
    }
    if entries.iter().any(|e| !e.alternates.is_empty()) {
        urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    }
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        write_url(&mut writer, entry)?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render a `<sitemapindex>` document pointing at the given sitemap URLs.
pub fn write_sitemap_index(locations: &[String]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut index = BytesStart::new("sitemapindex");
    index.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(index))?;

    for location in locations {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        write_text_element(&mut writer, "loc", location)?;
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Render only the alternate-link elements of one entry, one
/// `<xhtml:link/>` per pair in input order.
pub fn render_alternate_links(links: &[AlternateLink]) -> Result<String, SitemapError> {
    let mut writer = Writer::new(Vec::new());
    for link in links {
        write_alternate_link(&mut writer, link)?;
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_url(writer: &mut Writer<Vec<u8>>, entry: &UrlEntry) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new("url")))?;
    write_text_element(writer, "loc", &entry.location)?;
    if let Some(lastmod) = entry.lastmod {
        write_text_element(
            writer,
            "lastmod",
            &lastmod.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
    }
    if let Some(changefreq) = entry.changefreq {
        write_text_element(writer, "changefreq", changefreq.as_str())?;
    }
    if let Some(priority) = entry.priority {
        write_text_element(writer, "priority", &format!("{priority:.1}"))?;
    }
    if let Some(image) = &entry.image {
        write_image(writer, image)?;
    }
    for link in &entry.alternates {
        write_alternate_link(writer, link)?;
    }
    writer.write_event(Event::End(BytesEnd::new("url")))?;
    Ok(())
}

fn write_image(writer: &mut Writer<Vec<u8>>, image: &ImageEntry) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new("image:image")))?;
    write_text_element(writer, "image:loc", &image.location)?;
    if let Some(caption) = &image.caption {
        write_text_element(writer, "image:caption", caption)?;
    }
    if let Some(title) = &image.title {
        write_text_element(writer, "image:title", title)?;
    }
    if let Some(license) = &image.license {
        write_text_element(writer, "image:license", license)?;
    }
    if let Some(geo_location) = &image.geo_location {
        write_text_element(writer, "image:geo_location", geo_location)?;
    }
    writer.write_event(Event::End(BytesEnd::new("image:image")))?;
    Ok(())
}

fn write_alternate_link(
    writer: &mut Writer<Vec<u8>>,
    link: &AlternateLink,
) -> Result<(), SitemapError> {
    let mut element = BytesStart::new("xhtml:link");
    element.push_attribute(("rel", "alternate"));
    element.push_attribute(("hreflang", link.hreflang.as_str()));
    element.push_attribute(("href", link.href.as_str()));
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use crate::changefreq::ChangeFreq;
    use crate::entry::SitemapEntry;

    use super::*;

    fn entry(location: &str) -> UrlEntry {
        SitemapEntry::new(location).into()
    }

    #[test]
    fn test_urlset_has_declaration_and_namespace() {
        let xml = write_urlset(&[entry("http://example.com/")]).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>http://example.com/</loc>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_empty_urlset_renders() {
        let xml = write_urlset(&[]).unwrap();

        assert!(xml.contains("urlset"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_metadata_elements() {
        let mut url = entry("http://example.com/a");
        url.lastmod = Some(Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap());
        url.changefreq = Some(ChangeFreq::Weekly);
        url.priority = Some(0.5);

        let xml = write_urlset(&[url]).unwrap();

        assert!(xml.contains("<lastmod>2026-03-01T08:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn test_optional_metadata_omitted() {
        let xml = write_urlset(&[entry("http://example.com/")]).unwrap();

        assert!(!xml.contains("lastmod"));
        assert!(!xml.contains("changefreq"));
        assert!(!xml.contains("priority"));
    }

    #[test]
    fn test_image_block_and_namespace() {
        let mut url = entry("http://example.com/foo/1/");
        url.image = Some(ImageEntry {
            location: "http://example.com/media/1.jpg".to_owned(),
            caption: Some("A caption".to_owned()),
            title: None,
            license: None,
            geo_location: Some("Limerick, Ireland".to_owned()),
        });

        let xml = write_urlset(&[url]).unwrap();

        assert!(xml.contains("xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\""));
        assert!(xml.contains("<image:loc>http://example.com/media/1.jpg</image:loc>"));
        assert!(xml.contains("<image:caption>A caption</image:caption>"));
        assert!(xml.contains("<image:geo_location>Limerick, Ireland</image:geo_location>"));
        assert!(!xml.contains("image:title"));
    }

    #[test]
    fn test_alternate_links_in_order() {
        let mut url = entry("http://example.com/x");
        url.alternates = vec![
            AlternateLink::new("en-us", "/en/x"),
            AlternateLink::new("fr", "/fr/x"),
        ];

        let xml = write_urlset(&[url]).unwrap();

        assert!(xml.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
        let en = xml.find("hreflang=\"en-us\"").unwrap();
        let fr = xml.find("hreflang=\"fr\"").unwrap();
        assert!(en < fr);
        assert!(xml.contains("<xhtml:link rel=\"alternate\" hreflang=\"en-us\" href=\"/en/x\"/>"));
    }

    #[test]
    fn test_render_alternate_links_fragment() {
        let links = vec![
            AlternateLink::new("en-us", "/en/x"),
            AlternateLink::new("fr", "/fr/x"),
        ];

        let fragment = render_alternate_links(&links).unwrap();

        assert_eq!(
            fragment,
            "<xhtml:link rel=\"alternate\" hreflang=\"en-us\" href=\"/en/x\"/>\
             <xhtml:link rel=\"alternate\" hreflang=\"fr\" href=\"/fr/x\"/>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = write_urlset(&[entry("http://example.com/?a=1&b=2")]).unwrap();

        assert!(xml.contains("<loc>http://example.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_sitemap_index_lists_locations() {
        let xml = write_sitemap_index(&[
            "http://example.com/sitemap-blog.xml".to_owned(),
            "http://example.com/sitemap-static.xml".to_owned(),
        ])
        .unwrap();

        assert!(xml.contains("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>http://example.com/sitemap-blog.xml</loc>"));
        assert!(xml.contains("<loc>http://example.com/sitemap-static.xml</loc>"));
    }
}
