//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler:
//! - Building the HTTP client with the configured user agent string
//! - A single GET attempt per page
//! - Collapsing every transport error into a skippable result

use crate::config::UserAgentConfig;
use reqwest::{redirect::Policy, Client};

/// Maximum redirect hops followed for one request
pub const MAX_REDIRECTS: usize = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// A response with a body was received
    ///
    /// Any HTTP status counts, including 4xx and 5xx pages.
    Success {
        /// HTTP status code
        status_code: u16,
        /// Decoded page body
        body: String,
    },

    /// The request failed before a body could be read
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the status code and body, or `None` when there is nothing to parse
    ///
    /// An empty body is treated like a failed fetch.
    pub fn into_page(self) -> Option<(u16, String)> {
        match self {
            FetchResult::Success { status_code, body } if !body.is_empty() => {
                Some((status_code, body))
            }
            _ => None,
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// No request timeout is set; a hanging server stalls the crawl. Redirects are
/// followed up to [`MAX_REDIRECTS`] hops.
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use sumi_sweep::config::UserAgentConfig;
/// use sumi_sweep::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with exactly one GET attempt
///
/// # Error Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | Any HTTP status with a body | Success |
/// | DNS / connection failure | NetworkError |
/// | Too many redirects | NetworkError |
/// | Body read or decode failure | NetworkError |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: describe_error(&e),
            }
        }
    };

    let status_code = response.status().as_u16();

    match response.text().await {
        Ok(body) => FetchResult::Success { status_code, body },
        Err(e) => FetchResult::NetworkError {
            error: describe_error(&e),
        },
    }
}

/// Classifies a reqwest error into a short description
fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("Request timeout: {}", e)
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Redirect error: {}", e)
    } else {
        e.to_string()
    }
}
