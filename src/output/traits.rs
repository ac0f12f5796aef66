//! Output handler traits and types
//!
//! This module defines the page record produced for every fetched page, the
//! aggregate crawl result, and the trait interface for result sinks.

use crate::output::stats::CrawlStats;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Structured extraction result for one successfully fetched page
///
/// Field order is the key order of the serialized JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The URL as it was dequeued (not the post-redirect URL)
    pub url: String,

    /// Trimmed text of the first `<title>`, or `"No title"`
    pub title: String,

    /// HTTP status code of the response
    pub status_code: u16,

    /// `href` of the first `<link rel="canonical">`, or empty
    pub canonical: String,

    /// `content` of the first `<meta name="description">`, or empty
    pub description: String,

    /// Every anchor href on the page resolved to an absolute URL, in document
    /// order, including off-domain links and duplicates
    pub internal_links: Vec<String>,
}

/// Outcome of one crawl invocation
#[derive(Debug, Clone, Default)]
pub struct CrawlResult {
    /// Page records in fetch-completion order
    pub pages: Vec<PageRecord>,

    /// Counters collected while crawling
    pub stats: CrawlStats,
}

impl CrawlResult {
    /// Creates an empty result, as produced by an aborted crawl
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of recorded pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if no page was recorded
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// URLs of the recorded pages, in order
    pub fn urls(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.url.as_str()).collect()
    }
}

/// Trait for result sinks
///
/// A sink persists the page records of a finished crawl and can publish the
/// persisted artifact afterwards.
pub trait OutputHandler {
    /// Persists the page records
    ///
    /// # Arguments
    ///
    /// * `pages` - The page records, in fetch-completion order
    fn write_results(&self, pages: &[PageRecord]) -> OutputResult<()>;

    /// Publishes what [`OutputHandler::write_results`] persisted
    fn publish(&self) -> OutputResult<()>;
}
