//! Sitemap rendering endpoints.
//!
//! Serves the combined sitemap index, one `<urlset>` per registered
//! section, and a combined image sitemap. Pages are addressed with the
//! 1-based `p` query parameter; a missing section, a non-integer page,
//! or a page past the end are all 404s.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use sitemapx::{PageError, SitemapError, UrlEntry, xml};

use crate::error::ServerError;
use crate::handlers::parse_section_file;
use crate::registry::SitemapRegistry;
use crate::state::AppState;

/// Query parameters for sitemap requests.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SitemapQuery {
    /// 1-based page number, default 1.
    p: Option<String>,
}

/// Handle GET /sitemap.xml.
///
/// Lists one `<sitemap>` per page of every registered section.
pub(crate) async fn get_index(State(state): State<Arc<AppState>>) -> Result<Response, ServerError> {
    let mut locations = Vec::new();
    for (name, section) in state.registry.iter() {
        for page in 1..=section.num_pages() {
            let mut location = state.site.prefix(&format!("/sitemap-{name}.xml"));
            if page > 1 {
                location.push_str(&format!("?p={page}"));
            }
            locations.push(location);
        }
    }

    Ok(xml_response(xml::write_sitemap_index(&locations)?))
}

/// Handle GET /sitemap-{section}.xml.
pub(crate) async fn get_section(
    Path(file): Path<String>,
    Query(query): Query<SitemapQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let section =
        parse_section_file(&file).ok_or_else(|| ServerError::SectionNotFound(file.clone()))?;
    let page = parse_page(&query)?;
    let urls = collect_urls(&state.registry, Some(section), page)?;

    if state.debug {
        tracing::debug!(section, page, count = urls.len(), "Rendered sitemap section");
    }
    Ok(xml_response(xml::write_urlset(&urls)?))
}

/// Handle GET /sitemap-images.xml.
///
/// Renders every registered image sitemap into one `<urlset>`.
pub(crate) async fn get_images(
    Query(query): Query<SitemapQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let page = parse_page(&query)?;
    let urls = collect_urls(&state.images, None, page)?;

    Ok(xml_response(xml::write_urlset(&urls)?))
}

/// Collect URL entries from one section or all of them, concatenated
/// in registration order.
fn collect_urls(
    registry: &SitemapRegistry,
    section: Option<&str>,
    page: usize,
) -> Result<Vec<UrlEntry>, ServerError> {
    let selected: Vec<_> = match section {
        Some(name) => vec![
            registry
                .get(name)
                .ok_or_else(|| ServerError::SectionNotFound(name.to_owned()))?,
        ],
        None => registry.iter().map(|(_, s)| s).collect(),
    };

    let mut urls = Vec::new();
    for sitemap in selected {
        let mut page_urls = sitemap.get_urls(page).map_err(|err| match err {
            SitemapError::Page(PageError::OutOfRange { page, .. }) => {
                ServerError::PageNotFound { page }
            }
            other => ServerError::Sitemap(other),
        })?;
        urls.append(&mut page_urls);
    }
    Ok(urls)
}

/// Parse the `p` query parameter, defaulting to page 1.
fn parse_page(query: &SitemapQuery) -> Result<usize, ServerError> {
    match &query.p {
        None => Ok(1),
        Some(raw) => raw.parse().map_err(|_| ServerError::BadPage(raw.clone())),
    }
}

fn xml_response(xml: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use sitemapx::{
        CanonicalUrl, EntryOverrides, FieldSource, ImageFields, ImageSitemap, Site, StaticSitemap,
    };
    use tower::ServiceExt;

    use crate::app::create_router;

    use super::*;

    #[derive(Clone)]
    struct Photo {
        id: u32,
    }

    impl CanonicalUrl for Photo {
        fn canonical_url(&self) -> String {
            format!("/foo/{}/", self.id)
        }
    }

    fn photo_sitemap() -> ImageSitemap<Photo, Vec<Photo>> {
        let fields = ImageFields {
            location: FieldSource::per_item(|p: &Photo| Some(format!("/media/{}.jpg", p.id))),
            ..ImageFields::default()
        };
        ImageSitemap::new(
            vec![Photo { id: 1 }, Photo { id: 2 }],
            fields,
            Site::new("example.com"),
        )
        .with_per_page(1)
    }

    fn test_state() -> Arc<AppState> {
        let mut blog = StaticSitemap::default();
        blog.add_url("/welcome/", EntryOverrides::default());
        blog.add_url("/contact/", EntryOverrides::default());

        let registry = SitemapRegistry::new()
            .with_section("blog", Arc::new(blog))
            .with_section("photos", Arc::new(photo_sitemap()));

        let mut images = SitemapRegistry::new();
        images.register("foo-images", Arc::new(photo_sitemap()));

        Arc::new(AppState {
            registry,
            images,
            site: Site::new("example.com"),
            debug: false,
        })
    }

    async fn get(path: &str) -> (StatusCode, Option<String>, String) {
        let app = create_router(test_state());
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_lists_sections() {
        let (status, content_type, body) = get("/sitemap.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/xml"));
        assert!(body.contains("<sitemapindex"));
        assert!(body.contains("<loc>http://example.com/sitemap-blog.xml</loc>"));
        // The photos section spans two pages and is listed once per page.
        assert!(body.contains("<loc>http://example.com/sitemap-photos.xml</loc>"));
        assert!(body.contains("<loc>http://example.com/sitemap-photos.xml?p=2</loc>"));
    }

    #[tokio::test]
    async fn test_section_renders_urlset() {
        let (status, content_type, body) = get("/sitemap-blog.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/xml"));
        assert!(body.contains("<loc>/welcome/</loc>"));
        assert!(body.contains("<loc>/contact/</loc>"));
    }

    #[tokio::test]
    async fn test_unknown_section_is_404() {
        let (status, _, _) = get("/sitemap-shop.xml").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_integer_page_is_404() {
        let (status, _, _) = get("/sitemap-photos.xml?p=abc").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_past_end_is_404() {
        let (status, _, _) = get("/sitemap-photos.xml?p=999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_static_section_degrades_to_empty_page() {
        // Static sitemaps swallow out-of-range pages instead of 404ing.
        let (status, _, body) = get("/sitemap-blog.xml?p=999").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<url>"));
    }

    #[tokio::test]
    async fn test_images_route_renders_image_urlset() {
        let (status, _, body) = get("/sitemap-images.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<image:loc>http://example.com/media/1.jpg</image:loc>"));
        assert!(body.contains("<loc>http://example.com/foo/1/</loc>"));
    }

    #[tokio::test]
    async fn test_images_route_pages_with_p() {
        let (status, _, body) = get("/sitemap-images.xml?p=2").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<image:loc>http://example.com/media/2.jpg</image:loc>"));
        assert!(!body.contains("media/1.jpg"));
    }

    #[tokio::test]
    async fn test_images_registry_not_served_on_section_route() {
        let (status, _, body) = get("/sitemap-foo-images.xml").await;

        // Registered in the images registry, not the regular one.
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("No sitemap available"));
    }

    #[test]
    fn test_parse_page_defaults_to_one() {
        assert_eq!(parse_page(&SitemapQuery::default()).unwrap(), 1);
    }

    #[test]
    fn test_parse_page_rejects_negative_numbers() {
        let query = SitemapQuery {
            p: Some("-1".to_owned()),
        };
        assert!(matches!(
            parse_page(&query).unwrap_err(),
            ServerError::BadPage(raw) if raw == "-1"
        ));
    }
}
