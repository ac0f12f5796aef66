use url::Url;

/// Extracts the network location of a URL
///
/// The network location is the authority component as it appears in the
/// serialized URL: optional userinfo, the host, and the port when it is not
/// the scheme's default. Comparison against it is exact, so `example.com`,
/// `www.example.com` and `example.com:8080` are three distinct locations.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_sweep::url::network_location;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(network_location(&url), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(network_location(&url), "127.0.0.1:8080");
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(network_location(&url), "");
/// ```
pub fn network_location(url: &Url) -> String {
    let mut netloc = String::new();

    if !url.username().is_empty() || url.password().is_some() {
        netloc.push_str(url.username());
        if let Some(password) = url.password() {
            netloc.push(':');
            netloc.push_str(password);
        }
        netloc.push('@');
    }

    if let Some(host) = url.host_str() {
        netloc.push_str(host);
    }

    if let Some(port) = url.port() {
        netloc.push(':');
        netloc.push_str(&port.to_string());
    }

    netloc
}
