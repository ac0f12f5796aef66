//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop, which:
//! - Loads the seed origin's robots.txt once and aborts if it cannot
//! - Drains the frontier in FIFO order, one fetch at a time
//! - Parses every fetched page into a record
//! - Enqueues newly discovered links that stay on the seed's network location

use crate::config::Config;
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_page;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::output::{CrawlResult, CrawlStats, PageRecord};
use crate::robots::{load_robots, RobotsPolicy, WILDCARD_AGENT};
use crate::url::{is_valid_url, network_location};
use crate::SweepError;
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// Main crawler coordinator structure
///
/// A coordinator is bound to one seed. Every call to [`Coordinator::run`] is an
/// independent crawl with its own frontier.
pub struct Coordinator {
    client: Client,
    seed: Url,
    base_domain: String,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `seed` - The absolute URL the crawl starts from
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SweepError)` - The HTTP client could not be built
    pub fn new(config: &Config, seed: Url) -> Result<Self, SweepError> {
        let client = build_http_client(&config.user_agent)?;
        Ok(Self::with_client(client, seed))
    }

    /// Creates a coordinator around an existing HTTP client
    pub fn with_client(client: Client, seed: Url) -> Self {
        let base_domain = network_location(&seed);
        Self {
            client,
            seed,
            base_domain,
        }
    }

    /// The network location every enqueued link must match
    pub fn base_domain(&self) -> &str {
        &self.base_domain
    }

    /// Runs one crawl
    ///
    /// If robots.txt cannot be loaded the crawl stops before fetching anything
    /// and the result is empty.
    pub async fn run(&self) -> CrawlResult {
        tracing::info!("Starting crawl of {} (domain {})", self.seed, self.base_domain);

        let policy = match load_robots(&self.client, &self.seed).await {
            Ok(policy) => policy,
            Err(e) => {
                tracing::error!("Failed to fetch robots.txt for {}: {}", self.seed, e);
                return CrawlResult::empty();
            }
        };

        self.run_with_policy(&policy).await
    }

    /// Runs the crawl loop against an already loaded policy
    pub async fn run_with_policy(&self, policy: &RobotsPolicy) -> CrawlResult {
        let start_time = Instant::now();
        let mut frontier = Frontier::with_seed(self.seed.as_str());
        let mut pages: Vec<PageRecord> = Vec::new();
        let mut stats = CrawlStats::default();

        while let Some(current) = frontier.pop() {
            stats.urls_dequeued += 1;

            if frontier.is_visited(&current) {
                stats.duplicates_skipped += 1;
                continue;
            }

            // Checked before marking visited, so a re-enqueued disallowed URL
            // is evaluated again
            if !policy.is_allowed(WILDCARD_AGENT, &current) {
                tracing::debug!("URL {} disallowed by robots.txt", current);
                stats.disallowed += 1;
                continue;
            }

            frontier.mark_visited(&current);

            let Some(record) = self.process_url(&current).await else {
                stats.fetch_failures += 1;
                continue;
            };

            stats.links_discovered += record.internal_links.len() as u64;
            for link in &record.internal_links {
                if is_valid_url(link, &self.base_domain) && !frontier.is_visited(link) {
                    frontier.push(link.as_str());
                    stats.links_enqueued += 1;
                }
            }

            pages.push(record);
            stats.pages_recorded += 1;

            if stats.pages_recorded % 10 == 0 {
                let elapsed = start_time.elapsed();
                let rate = stats.pages_recorded as f64 / elapsed.as_secs_f64();
                tracing::info!(
                    "Progress: {} pages recorded, {} in frontier, {:.2} pages/sec",
                    stats.pages_recorded,
                    frontier.pending(),
                    rate
                );
            }
        }

        tracing::info!(
            "Crawl completed: {} pages recorded, {} URLs visited in {:?}",
            stats.pages_recorded,
            frontier.visited_count(),
            start_time.elapsed()
        );
        stats.log_summary();

        CrawlResult { pages, stats }
    }

    /// Fetches and parses a single URL
    ///
    /// Returns `None` when the page yields no body; the failure is logged and
    /// the crawl moves on.
    async fn process_url(&self, url: &str) -> Option<PageRecord> {
        let page_url = match Url::parse(url) {
            Ok(page_url) => page_url,
            Err(e) => {
                tracing::error!("Error accessing {}: {}", url, e);
                return None;
            }
        };

        tracing::debug!("Fetching {}", url);
        let (status_code, body) = match fetch_url(&self.client, url).await {
            FetchResult::NetworkError { error } => {
                tracing::error!("Error accessing {}: {}", url, error);
                return None;
            }
            success => match success.into_page() {
                Some(page) => page,
                None => {
                    tracing::warn!("Empty body from {}, skipping", url);
                    return None;
                }
            },
        };

        Some(parse_page(status_code, &body, &page_url))
    }
}
