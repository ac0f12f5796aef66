//! Robots.txt handling module
//!
//! This module fetches the seed origin's robots.txt once per crawl and turns it
//! into a [`RobotsPolicy`].

mod parser;

pub use parser::{RobotsPolicy, WILDCARD_AGENT};

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

/// Reasons a robots.txt could not be turned into a policy
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Invalid robots.txt URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} fetching {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

/// Builds the robots.txt URL for the origin of `base_url`
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_sweep::robots::robots_url;
///
/// let base = Url::parse("https://example.com/some/page?x=1").unwrap();
/// assert_eq!(robots_url(&base).unwrap().as_str(), "https://example.com/robots.txt");
/// ```
pub fn robots_url(base_url: &Url) -> Result<Url, url::ParseError> {
    base_url.join("/robots.txt")
}

/// Fetches and parses robots.txt for the origin of `base_url`
///
/// # Status Handling
///
/// | Response | Policy |
/// |----------|--------|
/// | 2xx | Parsed from the body |
/// | 401, 403 | Disallow everything |
/// | Other 4xx | Allow everything |
/// | 5xx, other | Error |
/// | Network error | Error |
///
/// # Returns
///
/// * `Ok(RobotsPolicy)` - A policy the crawl can consult
/// * `Err(RobotsError)` - No policy could be established
pub async fn load_robots(client: &Client, base_url: &Url) -> Result<RobotsPolicy, RobotsError> {
    let url = robots_url(base_url)?;
    tracing::debug!("Fetching robots.txt from {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| RobotsError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        tracing::info!("robots.txt at {} returned {}, disallowing all", url, status);
        return Ok(RobotsPolicy::disallow_all());
    }

    if status.is_client_error() {
        tracing::info!("robots.txt at {} returned {}, allowing all", url, status);
        return Ok(RobotsPolicy::allow_all());
    }

    if !status.is_success() {
        return Err(RobotsError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let content = response.text().await.map_err(|source| RobotsError::Fetch {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("Loaded robots.txt from {} ({} bytes)", url, content.len());
    Ok(RobotsPolicy::from_content(&content))
}
