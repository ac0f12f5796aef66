//! Output module for crawl results
//!
//! This module handles:
//! - The page record and crawl result data model
//! - Writing results as a JSON file and echoing it to stdout
//! - Crawl statistics

mod json;
pub mod stats;
mod traits;

pub use json::{render_json, JsonOutputHandler};
pub use stats::CrawlStats;
pub use traits::{CrawlResult, OutputError, OutputHandler, OutputResult, PageRecord};

/// Writes the crawl result through a sink and publishes it
///
/// # Arguments
///
/// * `handler` - The result sink
/// * `result` - The finished crawl
pub fn emit_results(handler: &dyn OutputHandler, result: &CrawlResult) -> OutputResult<()> {
    handler.write_results(&result.pages)?;
    handler.publish()
}
