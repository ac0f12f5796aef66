//! URL handling module for Sumi-Sweep
//!
//! This module provides network-location extraction, the same-domain check
//! that scopes a crawl, and href resolution.

mod domain;
mod resolve;

pub use domain::network_location;
pub use resolve::resolve_href;

use url::Url;

/// Returns true if `link` belongs to the domain being crawled
///
/// A link is in-domain iff its network location string-equals `base_domain`.
/// The location is taken from the parsed URL, so host case and default ports
/// are normalized before comparing.
/// Scheme is ignored, subdomains are distinct and a port difference makes two
/// locations unequal. Unparseable links are never in-domain.
///
/// # Examples
///
/// ```
/// use sumi_sweep::url::is_valid_url;
///
/// assert!(is_valid_url("http://example.com/about", "example.com"));
/// assert!(!is_valid_url("https://www.example.com/about", "example.com"));
/// ```
pub fn is_valid_url(link: &str, base_domain: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => network_location(&url) == base_domain,
        Err(_) => false,
    }
}
