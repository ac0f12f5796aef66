//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching, one attempt per page
//! - HTML parsing and link extraction
//! - The FIFO frontier and visited set
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_url, FetchResult, MAX_REDIRECTS};
pub use frontier::Frontier;
pub use parser::{parse_page, NO_TITLE};

use crate::config::Config;
use crate::output::CrawlResult;
use crate::SweepError;
use url::Url;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Load robots.txt for the seed's origin
/// 3. Fetch and parse every reachable, allowed, same-domain page
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The absolute URL to start from
///
/// # Returns
///
/// * `Ok(CrawlResult)` - The crawl ran; the result may be empty
/// * `Err(SweepError)` - The crawler could not be set up
///
/// # Example
///
/// ```no_run
/// use sumi_sweep::config::Config;
/// use sumi_sweep::crawler::crawl;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seed = Url::parse("https://example.com/")?;
/// let result = crawl(&Config::default(), seed).await?;
/// println!("{} pages", result.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seed: Url) -> Result<CrawlResult, SweepError> {
    let coordinator = Coordinator::new(config, seed)?;
    Ok(coordinator.run().await)
}
