use url::Url;

/// Resolves an href against the URL of the page it was found on
///
/// Standard base-URL join semantics apply: absolute, protocol-relative,
/// root-relative, path-relative, query-only and fragment-only hrefs all
/// resolve. The href is not filtered by scheme, so `mailto:` and
/// `javascript:` links come back unchanged.
///
/// Returns `None` only when the href cannot be joined at all.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_sweep::url::resolve_href;
///
/// let page = Url::parse("https://example.com/x/y").unwrap();
/// assert_eq!(
///     resolve_href(&page, "/about"),
///     Some("https://example.com/about".to_string())
/// );
/// ```
pub fn resolve_href(page_url: &Url, href: &str) -> Option<String> {
    match page_url.join(href) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            tracing::debug!("Failed to resolve href {:?} against {}: {}", href, page_url, e);
            None
        }
    }
}
