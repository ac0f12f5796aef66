//! HTML parser for extracting page metadata and links
//!
//! This module turns a fetched page into a [`PageRecord`]:
//! - Title from the first `<title>` element
//! - Canonical URL from the first `<link rel="canonical">`
//! - Description from the first `<meta name="description">`
//! - Every `<a href>` resolved against the page URL
//!
//! Parsing is best-effort. Malformed markup never fails, missing elements
//! produce defaults.

use crate::output::PageRecord;
use crate::url::resolve_href;
use scraper::{Html, Selector};
use url::Url;

/// Title used when a page has no `<title>` element
pub const NO_TITLE: &str = "No title";

/// Parses a fetched page into a page record
///
/// # Arguments
///
/// * `status_code` - The HTTP status of the response
/// * `html` - The page body
/// * `page_url` - The URL the page was fetched from, used to resolve links
///
/// # Example
///
/// ```
/// use sumi_sweep::crawler::parse_page;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let page_url = Url::parse("https://example.com/").unwrap();
/// let record = parse_page(200, html, &page_url);
/// assert_eq!(record.title, "Test");
/// assert_eq!(record.internal_links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn parse_page(status_code: u16, html: &str, page_url: &Url) -> PageRecord {
    let document = Html::parse_document(html);

    PageRecord {
        url: page_url.to_string(),
        title: extract_title(&document),
        status_code,
        canonical: extract_canonical(&document),
        description: extract_description(&document),
        internal_links: extract_links(&document, page_url),
    }
}

/// Extracts the trimmed text of the first `<title>`
///
/// A present but empty title yields an empty string, not the placeholder.
fn extract_title(document: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .map(|element| element.text().collect::<String>().trim().to_string())
        })
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn extract_canonical(document: &Html) -> String {
    first_attr(document, "link[rel~='canonical']", "href")
}

fn extract_description(document: &Html) -> String {
    first_attr(document, "meta[name='description']", "content")
}

/// Reads `attr` from the first element matching `css`, empty if either is missing
fn first_attr(document: &Html, css: &str, attr: &str) -> String {
    let Ok(selector) = Selector::parse(css) else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

/// Resolves every anchor href in document order
///
/// Off-domain links, non-HTTP schemes and duplicates are all kept.
fn extract_links(document: &Html, page_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_href(page_url, href) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}
