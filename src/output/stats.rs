//! Crawl statistics
//!
//! Counters gathered by the crawl loop and logged when it finishes.

/// Counters for one crawl invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Entries taken off the frontier
    pub urls_dequeued: u64,

    /// Entries discarded because the URL was already visited
    pub duplicates_skipped: u64,

    /// Entries discarded by robots.txt
    pub disallowed: u64,

    /// Fetches that produced no body
    pub fetch_failures: u64,

    /// Pages parsed and recorded
    pub pages_recorded: u64,

    /// Links found across all recorded pages
    pub links_discovered: u64,

    /// Links appended to the frontier
    pub links_enqueued: u64,
}

impl CrawlStats {
    /// Number of fetches attempted
    pub fn fetches_attempted(&self) -> u64 {
        self.pages_recorded + self.fetch_failures
    }

    /// Returns the share of attempted fetches that were recorded, in percent
    pub fn success_rate(&self) -> f64 {
        let attempted = self.fetches_attempted();
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_recorded as f64 / attempted as f64) * 100.0
    }

    /// Logs the statistics at INFO level
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl statistics: {} dequeued, {} duplicates, {} disallowed, {} fetch failures",
            self.urls_dequeued,
            self.duplicates_skipped,
            self.disallowed,
            self.fetch_failures
        );
        tracing::info!(
            "Recorded {} pages ({:.1}% of fetches), {} links found, {} enqueued",
            self.pages_recorded,
            self.success_rate(),
            self.links_discovered,
            self.links_enqueued
        );
    }
}
